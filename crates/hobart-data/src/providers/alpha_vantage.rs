//! Alpha Vantage payloads (`OVERVIEW`, `GLOBAL_QUOTE`, `INCOME_STATEMENT`,
//! `TIME_SERIES_DAILY`).
//!
//! Alpha Vantage returns every scalar as a string and uses `"None"` or `"-"`
//! for missing values. Those strings are passed through untouched.

use crate::snapshot::{IncomeReport, Overview, PriceHistory, PricePoint, PriceQuote};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Response of the `OVERVIEW` function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaVantageOverview {
    /// Ticker symbol
    #[serde(rename = "Symbol")]
    pub symbol: Option<String>,
    /// Company name
    #[serde(rename = "Name")]
    pub name: Option<String>,
    /// Business description
    #[serde(rename = "Description")]
    pub description: Option<String>,
    /// Sector label
    #[serde(rename = "Sector")]
    pub sector: Option<String>,
    /// Industry label
    #[serde(rename = "Industry")]
    pub industry: Option<String>,
    /// Market capitalization
    #[serde(rename = "MarketCapitalization")]
    pub market_capitalization: Option<Value>,
    /// P/E ratio
    #[serde(rename = "PERatio")]
    pub pe_ratio: Option<Value>,
    /// Forward P/E
    #[serde(rename = "ForwardPE")]
    pub forward_pe: Option<Value>,
    /// PEG ratio
    #[serde(rename = "PEGRatio")]
    pub peg_ratio: Option<Value>,
    /// Earnings per share
    #[serde(rename = "EPS")]
    pub eps: Option<Value>,
    /// Net profit margin (fraction)
    #[serde(rename = "ProfitMargin")]
    pub profit_margin: Option<Value>,
    /// Operating margin, trailing twelve months (fraction)
    #[serde(rename = "OperatingMarginTTM")]
    pub operating_margin_ttm: Option<Value>,
    /// Return on equity, trailing twelve months (fraction)
    #[serde(rename = "ReturnOnEquityTTM")]
    pub return_on_equity_ttm: Option<Value>,
    /// Quarterly revenue growth year over year (fraction)
    #[serde(rename = "QuarterlyRevenueGrowthYOY")]
    pub quarterly_revenue_growth_yoy: Option<Value>,
    /// Quarterly earnings growth year over year (fraction)
    #[serde(rename = "QuarterlyEarningsGrowthYOY")]
    pub quarterly_earnings_growth_yoy: Option<Value>,
    /// Consensus analyst target price
    #[serde(rename = "AnalystTargetPrice")]
    pub analyst_target_price: Option<Value>,
    /// 52-week high
    #[serde(rename = "52WeekHigh")]
    pub week_52_high: Option<Value>,
    /// 52-week low
    #[serde(rename = "52WeekLow")]
    pub week_52_low: Option<Value>,
    /// 50-day moving average
    #[serde(rename = "50DayMovingAverage")]
    pub day_50_moving_average: Option<Value>,
    /// 200-day moving average
    #[serde(rename = "200DayMovingAverage")]
    pub day_200_moving_average: Option<Value>,
    /// Beta
    #[serde(rename = "Beta")]
    pub beta: Option<Value>,
    /// Dividend yield
    #[serde(rename = "DividendYield")]
    pub dividend_yield: Option<Value>,
}

impl From<AlphaVantageOverview> for Overview {
    fn from(raw: AlphaVantageOverview) -> Self {
        Self {
            name: raw.name,
            sector: raw.sector,
            industry: raw.industry,
            description: raw.description,
            market_cap: raw.market_capitalization,
            pe_ratio: raw.pe_ratio,
            forward_pe: raw.forward_pe,
            peg_ratio: raw.peg_ratio,
            eps: raw.eps,
            profit_margin: raw.profit_margin,
            // OVERVIEW carries no gross margin field
            gross_margin: None,
            operating_margin: raw.operating_margin_ttm,
            return_on_equity: raw.return_on_equity_ttm,
            quarterly_revenue_growth: raw.quarterly_revenue_growth_yoy,
            quarterly_earnings_growth: raw.quarterly_earnings_growth_yoy,
            analyst_target_price: raw.analyst_target_price,
            fifty_two_week_high: raw.week_52_high,
            fifty_two_week_low: raw.week_52_low,
            fifty_day_moving_average: raw.day_50_moving_average,
            two_hundred_day_moving_average: raw.day_200_moving_average,
            short_interest: None,
            beta: raw.beta,
            dividend_yield: raw.dividend_yield,
        }
    }
}

/// Response of the `GLOBAL_QUOTE` function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaVantageGlobalQuote {
    /// Quote body
    #[serde(rename = "Global Quote")]
    pub quote: GlobalQuoteBody,
}

/// Body of a `GLOBAL_QUOTE` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalQuoteBody {
    /// Ticker symbol
    #[serde(rename = "01. symbol")]
    pub symbol: Option<String>,
    /// Last price
    #[serde(rename = "05. price")]
    pub price: Option<Value>,
    /// Absolute change
    #[serde(rename = "09. change")]
    pub change: Option<Value>,
    /// Percent change, e.g. `"1.2345%"`
    #[serde(rename = "10. change percent")]
    pub change_percent: Option<Value>,
}

impl From<AlphaVantageGlobalQuote> for PriceQuote {
    fn from(raw: AlphaVantageGlobalQuote) -> Self {
        Self {
            price: raw.quote.price,
            change: raw.quote.change,
            change_percent: raw.quote.change_percent,
        }
    }
}

/// Response of the `INCOME_STATEMENT` function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlphaVantageIncomeStatement {
    /// Ticker symbol
    pub symbol: Option<String>,
    /// Annual reports, most recent first
    pub annual_reports: Vec<AlphaVantageIncomeReport>,
    /// Quarterly reports, most recent first
    pub quarterly_reports: Vec<AlphaVantageIncomeReport>,
}

/// One report inside an `INCOME_STATEMENT` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlphaVantageIncomeReport {
    /// Period end date
    pub fiscal_date_ending: Option<String>,
    /// Total revenue
    pub total_revenue: Option<Value>,
    /// Gross profit
    pub gross_profit: Option<Value>,
    /// Operating income
    pub operating_income: Option<Value>,
    /// Net income
    pub net_income: Option<Value>,
}

impl From<AlphaVantageIncomeReport> for IncomeReport {
    fn from(raw: AlphaVantageIncomeReport) -> Self {
        Self {
            fiscal_date_ending: raw.fiscal_date_ending,
            total_revenue: raw.total_revenue,
            gross_profit: raw.gross_profit,
            operating_income: raw.operating_income,
            net_income: raw.net_income,
        }
    }
}

impl AlphaVantageIncomeStatement {
    /// Canonical reports, quarterly when available and annual otherwise.
    pub fn into_reports(self) -> Vec<IncomeReport> {
        let reports = if self.quarterly_reports.is_empty() {
            self.annual_reports
        } else {
            self.quarterly_reports
        };
        reports.into_iter().map(IncomeReport::from).collect()
    }
}

/// Response of the `TIME_SERIES_DAILY` function.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaVantageDailySeries {
    /// Bars keyed by `YYYY-MM-DD`
    #[serde(rename = "Time Series (Daily)")]
    pub series: BTreeMap<String, AlphaVantageDailyBar>,
}

/// One daily bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaVantageDailyBar {
    /// Open
    #[serde(rename = "1. open")]
    pub open: Option<Value>,
    /// High
    #[serde(rename = "2. high")]
    pub high: Option<Value>,
    /// Low
    #[serde(rename = "3. low")]
    pub low: Option<Value>,
    /// Close
    #[serde(rename = "4. close")]
    pub close: Option<Value>,
    /// Volume
    #[serde(rename = "5. volume")]
    pub volume: Option<Value>,
}

impl From<AlphaVantageDailySeries> for PriceHistory {
    fn from(raw: AlphaVantageDailySeries) -> Self {
        Self {
            prices: raw
                .series
                .into_iter()
                .map(|(date, bar)| PricePoint {
                    date,
                    close: bar.close,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[test]
    fn test_overview_maps_pascal_case_keys() {
        let raw: AlphaVantageOverview = serde_json::from_value(json!({
            "Symbol": "NVDA",
            "Name": "NVIDIA Corporation",
            "Industry": "SEMICONDUCTORS & RELATED DEVICES",
            "PERatio": "65.3",
            "QuarterlyRevenueGrowthYOY": "1.224",
            "50DayMovingAverage": "118.2",
            "AnalystTargetPrice": "None"
        }))
        .unwrap();

        let overview = Overview::from(raw);
        assert_eq!(overview.name.as_deref(), Some("NVIDIA Corporation"));
        assert_eq!(overview.pe_ratio, Some(json!("65.3")));
        assert_eq!(overview.quarterly_revenue_growth, Some(json!("1.224")));
        assert_eq!(overview.fifty_day_moving_average, Some(json!("118.2")));
        assert_eq!(overview.analyst_target_price, Some(json!("None")));
        assert!(overview.gross_margin.is_none());
    }

    #[rstest]
    #[case::prefers_quarterly(
        json!({
            "symbol": "AMD",
            "annualReports": [{"fiscalDateEnding": "2023-12-31", "totalRevenue": "22680000000"}],
            "quarterlyReports": [
                {"fiscalDateEnding": "2024-06-30", "totalRevenue": "5835000000"},
                {"fiscalDateEnding": "2024-03-31", "totalRevenue": "5473000000"}
            ]
        }),
        2,
        Some("2024-06-30")
    )]
    #[case::falls_back_to_annual(
        json!({"annualReports": [{"fiscalDateEnding": "2023-12-31", "totalRevenue": "100"}]}),
        1,
        Some("2023-12-31")
    )]
    #[case::empty_quarterly_uses_annual(
        json!({
            "annualReports": [{"fiscalDateEnding": "2023-12-31"}],
            "quarterlyReports": []
        }),
        1,
        Some("2023-12-31")
    )]
    #[case::no_reports(json!({"symbol": "XYZ"}), 0, None)]
    fn test_income_statement_reports(
        #[case] payload: Value,
        #[case] expected_len: usize,
        #[case] first_date: Option<&str>,
    ) {
        let raw: AlphaVantageIncomeStatement = serde_json::from_value(payload).unwrap();
        let reports = raw.into_reports();
        assert_eq!(reports.len(), expected_len);
        assert_eq!(
            reports.first().and_then(|r| r.fiscal_date_ending.as_deref()),
            first_date
        );
    }

    #[test]
    fn test_daily_series_to_history() {
        let raw: AlphaVantageDailySeries = serde_json::from_value(json!({
            "Meta Data": {"2. Symbol": "IBM"},
            "Time Series (Daily)": {
                "2024-01-03": {"4. close": "161.10"},
                "2024-01-02": {"4. close": "158.16"}
            }
        }))
        .unwrap();

        let history = PriceHistory::from(raw);
        assert_eq!(history.prices.len(), 2);
        assert!(history.prices.iter().any(|p| p.date == "2024-01-02"));
    }
}
