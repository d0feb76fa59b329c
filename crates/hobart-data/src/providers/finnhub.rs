//! Finnhub payloads (`/quote`, `/stock/metric`, `/stock/profile2`,
//! `/stock/recommendation`, `/stock/price-target`).

use crate::snapshot::{AnalystRatings, BasicFinancials, Overview, PriceQuote, PriceTargets};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Response of `/quote`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinnhubQuote {
    /// Current price
    pub c: Option<Value>,
    /// Change
    pub d: Option<Value>,
    /// Percent change
    pub dp: Option<Value>,
    /// High of the day
    pub h: Option<Value>,
    /// Low of the day
    pub l: Option<Value>,
    /// Open of the day
    pub o: Option<Value>,
    /// Previous close
    pub pc: Option<Value>,
}

impl From<FinnhubQuote> for PriceQuote {
    fn from(raw: FinnhubQuote) -> Self {
        Self {
            price: raw.c,
            change: raw.d,
            change_percent: raw.dp,
        }
    }
}

/// Response of `/stock/metric?metric=all`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinnhubBasicFinancials {
    /// Ticker symbol
    pub symbol: Option<String>,
    /// Metric name to value
    pub metric: BTreeMap<String, Value>,
}

impl From<FinnhubBasicFinancials> for BasicFinancials {
    fn from(raw: FinnhubBasicFinancials) -> Self {
        Self { metric: raw.metric }
    }
}

/// Response of `/stock/profile2`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinnhubProfile {
    /// Company name
    pub name: Option<String>,
    /// Ticker symbol
    pub ticker: Option<String>,
    /// Industry label
    pub finnhub_industry: Option<String>,
    /// Market capitalization in millions
    pub market_capitalization: Option<Value>,
}

impl From<FinnhubProfile> for Overview {
    fn from(raw: FinnhubProfile) -> Self {
        Self {
            name: raw.name,
            industry: raw.finnhub_industry,
            market_cap: raw.market_capitalization,
            ..Self::default()
        }
    }
}

/// One period of `/stock/recommendation`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinnhubRecommendation {
    /// Period start (`YYYY-MM-DD`)
    pub period: Option<String>,
    /// Strong buy count
    pub strong_buy: Option<Value>,
    /// Buy count
    pub buy: Option<Value>,
    /// Hold count
    pub hold: Option<Value>,
    /// Sell count
    pub sell: Option<Value>,
    /// Strong sell count
    pub strong_sell: Option<Value>,
}

impl From<FinnhubRecommendation> for AnalystRatings {
    fn from(raw: FinnhubRecommendation) -> Self {
        Self {
            period: raw.period,
            strong_buy: raw.strong_buy,
            buy: raw.buy,
            hold: raw.hold,
            sell: raw.sell,
            strong_sell: raw.strong_sell,
            target_price: None,
        }
    }
}

impl FinnhubRecommendation {
    /// Most recent period of a `/stock/recommendation` response.
    ///
    /// Periods are `YYYY-MM-DD` strings, so the lexical maximum is the latest.
    pub fn latest(periods: Vec<Self>) -> Option<Self> {
        periods
            .into_iter()
            .max_by(|a, b| a.period.cmp(&b.period))
    }
}

/// Response of `/stock/price-target`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinnhubPriceTarget {
    /// Ticker symbol
    pub symbol: Option<String>,
    /// Highest target
    pub target_high: Option<Value>,
    /// Lowest target
    pub target_low: Option<Value>,
    /// Mean target
    pub target_mean: Option<Value>,
    /// Median target
    pub target_median: Option<Value>,
    /// Last update
    pub last_updated: Option<String>,
}

impl From<FinnhubPriceTarget> for PriceTargets {
    fn from(raw: FinnhubPriceTarget) -> Self {
        Self {
            target_low: raw.target_low,
            target_mean: raw.target_mean,
            target_median: raw.target_median,
            target_high: raw.target_high,
            last_updated: raw.last_updated,
        }
    }
}
