//! Canonical per-symbol financial snapshot.
//!
//! A [`FinancialSnapshot`] is assembled by the caller from whatever provider
//! responses are available. Every section is optional and every scalar keeps
//! its provider-native JSON form (number or numeric string); nothing here
//! coerces values, so a missing field is never confused with a zero.
//!
//! Field names serialize in camelCase and match the keys used by
//! Alpha Vantage / Finnhub shaped payloads (`basicFinancials.metric`,
//! `priceHistory.prices`, `incomeStatement`, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Everything known about one entity at report-build time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialSnapshot {
    /// Ticker symbol
    pub symbol: String,
    /// Latest quote
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceQuote>,
    /// Descriptive and ratio fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<Overview>,
    /// Canonical ratio map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_financials: Option<BasicFinancials>,
    /// Historical closes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_history: Option<PriceHistory>,
    /// Periodic income reports, most recent first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub income_statement: Vec<IncomeReport>,
    /// Analyst rating counts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyst_ratings: Option<AnalystRatings>,
    /// Analyst price targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_targets: Option<PriceTargets>,
}

impl FinancialSnapshot {
    /// Create an empty snapshot for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    /// Raw entry of the `basicFinancials.metric` map.
    pub fn metric(&self, key: &str) -> Option<&Value> {
        self.basic_financials
            .as_ref()
            .and_then(|financials| financials.metric.get(key))
    }

    /// Display name, falling back to the symbol.
    pub fn display_name(&self) -> &str {
        self.overview
            .as_ref()
            .and_then(|overview| overview.name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.symbol)
    }

    /// Price points, in whatever order the provider returned them.
    pub fn prices(&self) -> &[PricePoint] {
        self.price_history
            .as_ref()
            .map(|history| history.prices.as_slice())
            .unwrap_or_default()
    }
}

/// Current quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceQuote {
    /// Last traded price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    /// Absolute change on the day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<Value>,
    /// Percent change on the day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<Value>,
}

/// Company overview: descriptive text plus ratio fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overview {
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sector label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Industry label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Business description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Market capitalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Value>,
    /// Trailing P/E ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<Value>,
    /// Forward P/E ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_pe: Option<Value>,
    /// PEG ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peg_ratio: Option<Value>,
    /// Earnings per share
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps: Option<Value>,
    /// Net profit margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_margin: Option<Value>,
    /// Gross margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_margin: Option<Value>,
    /// Operating margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_margin: Option<Value>,
    /// Return on equity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_on_equity: Option<Value>,
    /// Quarterly revenue growth, year over year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarterly_revenue_growth: Option<Value>,
    /// Quarterly earnings growth, year over year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarterly_earnings_growth: Option<Value>,
    /// Consensus analyst target price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyst_target_price: Option<Value>,
    /// 52-week high
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_high: Option<Value>,
    /// 52-week low
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_low: Option<Value>,
    /// 50-day simple moving average
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_day_moving_average: Option<Value>,
    /// 200-day simple moving average
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_hundred_day_moving_average: Option<Value>,
    /// Short interest (percent of float)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_interest: Option<Value>,
    /// Beta
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<Value>,
    /// Dividend yield
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<Value>,
}

macro_rules! fill_missing {
    ($target:ident, $other:ident; $($field:ident),+ $(,)?) => {
        $(
            if $target.$field.is_none() {
                $target.$field = $other.$field;
            }
        )+
    };
}

impl Overview {
    /// Fill every field that is missing here from `other`.
    ///
    /// Fields already present are kept, so the receiver wins on conflicts.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        fill_missing!(self, other;
            name,
            sector,
            industry,
            description,
            market_cap,
            pe_ratio,
            forward_pe,
            peg_ratio,
            eps,
            profit_margin,
            gross_margin,
            operating_margin,
            return_on_equity,
            quarterly_revenue_growth,
            quarterly_earnings_growth,
            analyst_target_price,
            fifty_two_week_high,
            fifty_two_week_low,
            fifty_day_moving_average,
            two_hundred_day_moving_average,
            short_interest,
            beta,
            dividend_yield,
        );
        self
    }
}

/// Canonical ratio map (`revenueGrowthTTM`, `grossMarginTTM`, `epsGrowth5Y`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicFinancials {
    /// Metric name to raw value
    pub metric: BTreeMap<String, Value>,
}

/// Historical closing prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceHistory {
    /// Price points; order is not guaranteed
    pub prices: Vec<PricePoint>,
}

/// A single dated close.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricePoint {
    /// ISO-ish date string
    pub date: String,
    /// Closing price
    pub close: Option<Value>,
}

impl PricePoint {
    /// Create a price point from a date and a numeric close.
    pub fn new(date: impl Into<String>, close: f64) -> Self {
        Self {
            date: date.into(),
            close: Some(Value::from(close)),
        }
    }
}

/// One periodic income statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeReport {
    /// Period end date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_date_ending: Option<String>,
    /// Total revenue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<Value>,
    /// Gross profit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_profit: Option<Value>,
    /// Operating income
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_income: Option<Value>,
    /// Net income
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_income: Option<Value>,
}

/// Analyst rating counts and consensus target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalystRatings {
    /// Period the counts refer to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Strong buy count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_buy: Option<Value>,
    /// Buy count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy: Option<Value>,
    /// Hold count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold: Option<Value>,
    /// Sell count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell: Option<Value>,
    /// Strong sell count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_sell: Option<Value>,
    /// Consensus target price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<Value>,
}

/// Analyst price target distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceTargets {
    /// Lowest target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_low: Option<Value>,
    /// Mean target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_mean: Option<Value>,
    /// Median target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_median: Option<Value>,
    /// Highest target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_high: Option<Value>,
    /// Date the targets were last updated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_camel_case_snapshot() {
        let snapshot: FinancialSnapshot = serde_json::from_value(json!({
            "symbol": "NVDA",
            "price": {"price": "120.5", "changePercent": 1.2},
            "overview": {"name": "NVIDIA Corp", "peRatio": 25},
            "basicFinancials": {"metric": {"grossMarginTTM": 0.75}},
            "priceHistory": {"prices": [{"date": "2024-01-01", "close": 100}]},
            "incomeStatement": [{"totalRevenue": "1000", "grossProfit": "600"}],
            "analystRatings": {"strongBuy": 10, "buy": 5},
            "priceTargets": {"targetMean": 150}
        }))
        .unwrap();

        assert_eq!(snapshot.symbol, "NVDA");
        assert_eq!(snapshot.display_name(), "NVIDIA Corp");
        assert_eq!(snapshot.metric("grossMarginTTM"), Some(&json!(0.75)));
        assert_eq!(snapshot.prices().len(), 1);
        assert_eq!(snapshot.income_statement.len(), 1);
        assert_eq!(
            snapshot.overview.as_ref().unwrap().pe_ratio,
            Some(json!(25))
        );
    }

    #[test]
    fn test_empty_object_is_valid_snapshot() {
        let snapshot: FinancialSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.symbol.is_empty());
        assert!(snapshot.prices().is_empty());
        assert!(snapshot.metric("peTTM").is_none());
    }

    #[test]
    fn test_null_fields_are_absent() {
        let snapshot: FinancialSnapshot = serde_json::from_value(json!({
            "symbol": "X",
            "overview": {"peRatio": null, "name": null}
        }))
        .unwrap();
        let overview = snapshot.overview.as_ref().unwrap();
        assert!(overview.pe_ratio.is_none());
        assert_eq!(snapshot.display_name(), "X");
    }

    #[test]
    fn test_overview_merge_keeps_receiver() {
        let primary = Overview {
            name: Some("Primary".to_string()),
            pe_ratio: Some(json!(30)),
            ..Overview::default()
        };
        let secondary = Overview {
            name: Some("Secondary".to_string()),
            industry: Some("Semiconductors".to_string()),
            pe_ratio: Some(json!(10)),
            ..Overview::default()
        };

        let merged = primary.merge(secondary);
        assert_eq!(merged.name.as_deref(), Some("Primary"));
        assert_eq!(merged.industry.as_deref(), Some("Semiconductors"));
        assert_eq!(merged.pe_ratio, Some(json!(30)));
    }

    #[test]
    fn test_serialize_skips_missing_sections() {
        let snapshot = FinancialSnapshot::new("AMD");
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value, json!({"symbol": "AMD"}));
    }
}
