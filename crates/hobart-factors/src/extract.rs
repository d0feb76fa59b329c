//! Per-entity metric extractors.
//!
//! Each metric is described by a [`MetricChain`]: canonical metric-map keys
//! tried in priority order, then an optional overview field. The first
//! present value wins. Growth and margin chains are passed through
//! [`normalize_percent`]; raw ratios (P/E, EPS) are not.

use crate::normalize::{normalize_percent, percent_change, to_number};
use hobart_data::{FinancialSnapshot, Overview};
use serde_json::Value;

/// First present value of a lazily evaluated sequence of candidates.
pub fn first_present<I>(candidates: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    candidates.into_iter().flatten().next()
}

/// Overview field used as the last link of a fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewField {
    /// `quarterlyRevenueGrowth`
    QuarterlyRevenueGrowth,
    /// `quarterlyEarningsGrowth`
    QuarterlyEarningsGrowth,
    /// `grossMargin`
    GrossMargin,
    /// `operatingMargin`
    OperatingMargin,
    /// `returnOnEquity`
    ReturnOnEquity,
    /// `eps`
    Eps,
    /// `peRatio`
    PeRatio,
    /// `analystTargetPrice`
    AnalystTargetPrice,
    /// `fiftyDayMovingAverage`
    FiftyDayMovingAverage,
    /// `marketCap`
    MarketCap,
    /// `fiftyTwoWeekHigh`
    FiftyTwoWeekHigh,
    /// `fiftyTwoWeekLow`
    FiftyTwoWeekLow,
}

impl OverviewField {
    /// Raw value of this field.
    pub const fn get(self, overview: &Overview) -> Option<&Value> {
        let field = match self {
            Self::QuarterlyRevenueGrowth => &overview.quarterly_revenue_growth,
            Self::QuarterlyEarningsGrowth => &overview.quarterly_earnings_growth,
            Self::GrossMargin => &overview.gross_margin,
            Self::OperatingMargin => &overview.operating_margin,
            Self::ReturnOnEquity => &overview.return_on_equity,
            Self::Eps => &overview.eps,
            Self::PeRatio => &overview.pe_ratio,
            Self::AnalystTargetPrice => &overview.analyst_target_price,
            Self::FiftyDayMovingAverage => &overview.fifty_day_moving_average,
            Self::MarketCap => &overview.market_cap,
            Self::FiftyTwoWeekHigh => &overview.fifty_two_week_high,
            Self::FiftyTwoWeekLow => &overview.fifty_two_week_low,
        };
        field.as_ref()
    }

    /// Numeric value of this field in a snapshot's overview.
    pub fn number(self, snapshot: &FinancialSnapshot) -> Option<f64> {
        to_number(snapshot.overview.as_ref().and_then(|overview| self.get(overview)))
    }
}

/// Ordered fallback chain for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricChain {
    /// Metric name used in logs and reports
    pub name: &'static str,
    /// Canonical metric-map keys, highest priority first
    pub keys: &'static [&'static str],
    /// Overview field consulted when no metric key is present
    pub overview: Option<OverviewField>,
    /// Whether the result is normalized to percent
    pub percent: bool,
}

impl MetricChain {
    /// Extract the metric from a snapshot.
    pub fn extract(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        let from_metrics = self
            .keys
            .iter()
            .map(|key| to_number(snapshot.metric(key)));
        let from_overview = self
            .overview
            .into_iter()
            .map(|field| field.number(snapshot));
        let value = first_present(from_metrics.chain(from_overview))?;
        Some(if self.percent {
            normalize_percent(value)
        } else {
            value
        })
    }
}

/// Revenue growth, percent.
pub const REVENUE_GROWTH: MetricChain = MetricChain {
    name: "revenue_growth",
    keys: &["revenueGrowthTTM", "revenueGrowthAnnual", "revenueGrowth5Y"],
    overview: Some(OverviewField::QuarterlyRevenueGrowth),
    percent: true,
};

/// EPS growth, percent.
pub const EPS_GROWTH: MetricChain = MetricChain {
    name: "eps_growth",
    keys: &["epsGrowthTTM", "epsGrowthAnnual", "epsGrowth5Y"],
    overview: Some(OverviewField::QuarterlyEarningsGrowth),
    percent: true,
};

/// Gross margin, percent.
pub const GROSS_MARGIN: MetricChain = MetricChain {
    name: "gross_margin",
    keys: &["grossMarginTTM", "grossMarginAnnual", "grossMargin5Y"],
    overview: Some(OverviewField::GrossMargin),
    percent: true,
};

/// Operating margin, percent.
pub const OPERATING_MARGIN: MetricChain = MetricChain {
    name: "operating_margin",
    keys: &[
        "operatingMarginTTM",
        "operatingMarginAnnual",
        "operatingMargin5Y",
    ],
    overview: Some(OverviewField::OperatingMargin),
    percent: true,
};

/// Return on equity, percent.
pub const RETURN_ON_EQUITY: MetricChain = MetricChain {
    name: "return_on_equity",
    keys: &["roeTTM", "roeRfy", "roe5Y"],
    overview: Some(OverviewField::ReturnOnEquity),
    percent: true,
};

/// Earnings per share, TTM preferred.
pub const EPS: MetricChain = MetricChain {
    name: "eps",
    keys: &["epsTTM", "epsAnnual"],
    overview: Some(OverviewField::Eps),
    percent: false,
};

/// Price to earnings ratio.
pub const PE_RATIO: MetricChain = MetricChain {
    name: "pe_ratio",
    keys: &["peTTM", "peAnnual"],
    overview: Some(OverviewField::PeRatio),
    percent: false,
};

/// Revenue growth, percent.
pub fn revenue_growth(snapshot: &FinancialSnapshot) -> Option<f64> {
    REVENUE_GROWTH.extract(snapshot)
}

/// EPS growth, percent.
pub fn eps_growth(snapshot: &FinancialSnapshot) -> Option<f64> {
    EPS_GROWTH.extract(snapshot)
}

/// Gross margin, percent.
pub fn gross_margin(snapshot: &FinancialSnapshot) -> Option<f64> {
    GROSS_MARGIN.extract(snapshot)
}

/// Operating margin, percent.
pub fn operating_margin(snapshot: &FinancialSnapshot) -> Option<f64> {
    OPERATING_MARGIN.extract(snapshot)
}

/// Return on equity, percent.
pub fn return_on_equity(snapshot: &FinancialSnapshot) -> Option<f64> {
    RETURN_ON_EQUITY.extract(snapshot)
}

/// Earnings per share.
pub fn eps(snapshot: &FinancialSnapshot) -> Option<f64> {
    EPS.extract(snapshot)
}

/// P/E ratio (sign preserved).
pub fn pe_ratio(snapshot: &FinancialSnapshot) -> Option<f64> {
    PE_RATIO.extract(snapshot)
}

/// A single canonical metric, normalized to percent.
///
/// Unlike the chains above this never consults the overview.
pub fn metric_percent(snapshot: &FinancialSnapshot, key: &str) -> Option<f64> {
    to_number(snapshot.metric(key)).map(normalize_percent)
}

/// Current price from the quote.
pub fn current_price(snapshot: &FinancialSnapshot) -> Option<f64> {
    to_number(snapshot.price.as_ref().and_then(|quote| quote.price.as_ref()))
}

/// Day change in percent as reported by the provider.
pub fn change_percent(snapshot: &FinancialSnapshot) -> Option<f64> {
    to_number(
        snapshot
            .price
            .as_ref()
            .and_then(|quote| quote.change_percent.as_ref()),
    )
}

/// Mean analyst target from `priceTargets.targetMean`.
pub fn target_mean(snapshot: &FinancialSnapshot) -> Option<f64> {
    to_number(
        snapshot
            .price_targets
            .as_ref()
            .and_then(|targets| targets.target_mean.as_ref()),
    )
}

/// Best available target price: `priceTargets.targetMean`, then the
/// consensus target on `analystRatings`, then `overview.analystTargetPrice`.
pub fn target_price(snapshot: &FinancialSnapshot) -> Option<f64> {
    let consensus = || {
        to_number(
            snapshot
                .analyst_ratings
                .as_ref()
                .and_then(|ratings| ratings.target_price.as_ref()),
        )
    };
    target_mean(snapshot)
        .or_else(consensus)
        .or_else(|| OverviewField::AnalystTargetPrice.number(snapshot))
}

/// `(target - price) / price * 100`, absent unless both are strictly positive.
pub fn upside_percent(price: Option<f64>, target: Option<f64>) -> Option<f64> {
    match (price, target) {
        (Some(price), Some(target)) if price > 0.0 && target > 0.0 => {
            percent_change(price, target)
        }
        _ => None,
    }
}

/// Upside from the current price to the best available target.
pub fn target_upside(snapshot: &FinancialSnapshot) -> Option<f64> {
    upside_percent(current_price(snapshot), target_price(snapshot))
}

/// Distance of the current price from its 50-day moving average, percent.
pub fn sma50_trend(snapshot: &FinancialSnapshot) -> Option<f64> {
    let price = current_price(snapshot)?;
    let sma = OverviewField::FiftyDayMovingAverage
        .number(snapshot)
        .filter(|sma| *sma > 0.0)?;
    percent_change(sma, price)
}
