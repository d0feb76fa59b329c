//! Momentum component
//!
//! Percent change from the first to the last close of the date-sorted price
//! history, centered on a baseline of 50.

use crate::component::{ComponentKind, ConfigurableComponent, ScoreComponent};
use crate::normalize::{clamp_score, percent_change, to_number};
use crate::series::sort_by_date;
use hobart_data::FinancialSnapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the Momentum component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MomentumConfig {
    /// Score for a flat price history (default: 50)
    pub baseline: f64,
    /// Minimum number of price points required (default: 2)
    pub min_points: usize,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            baseline: 50.0,
            min_points: 2,
        }
    }
}

/// Momentum scores the trend of the price history
#[derive(Debug, Clone)]
pub struct MomentumComponent {
    config: MomentumConfig,
}

impl MomentumComponent {
    /// Percent change from first to last sorted close.
    pub fn price_change(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        let prices = snapshot.prices();
        if prices.len() < self.config.min_points.max(2) {
            debug!(symbol = %snapshot.symbol, points = prices.len(), "not enough price points");
            return None;
        }
        let sorted = sort_by_date(prices);
        let first = to_number(sorted.first()?.close.as_ref())?;
        let last = to_number(sorted.last()?.close.as_ref())?;
        if last == 0.0 {
            return None;
        }
        percent_change(first, last)
    }
}

impl ScoreComponent for MomentumComponent {
    fn name(&self) -> &str {
        "momentum"
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Momentum
    }

    fn score(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        self.price_change(snapshot)
            .map(|change| clamp_score(self.config.baseline + change))
    }
}

impl ConfigurableComponent for MomentumComponent {
    type Config = MomentumConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

impl Default for MomentumComponent {
    fn default() -> Self {
        Self::with_config(MomentumConfig::default())
    }
}
