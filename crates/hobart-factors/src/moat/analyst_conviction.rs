//! Analyst Conviction
//!
//! Blends the strong-buy share of analyst ratings with the upside to the
//! mean price target. Either half may be missing.

use crate::extract::{current_price, target_mean, upside_percent};
use crate::normalize::{average, clamp_score, to_number};
use hobart_data::FinancialSnapshot;
use serde::{Deserialize, Serialize};

/// Configuration for the AnalystConviction factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalystConvictionConfig {
    /// Score for zero upside (default: 50)
    pub baseline: f64,
}

impl Default for AnalystConvictionConfig {
    fn default() -> Self {
        Self { baseline: 50.0 }
    }
}

/// AnalystConviction scores sell-side enthusiasm
#[derive(Debug, Clone, Default)]
pub struct AnalystConvictionFactor {
    config: AnalystConvictionConfig,
}

impl AnalystConvictionFactor {
    /// Build with explicit parameters.
    pub const fn with_config(config: AnalystConvictionConfig) -> Self {
        Self { config }
    }

    /// Current parameters.
    pub const fn config(&self) -> &AnalystConvictionConfig {
        &self.config
    }

    /// Strong-buy ratings as a percentage of all ratings.
    ///
    /// Missing categories count as zero; absent when no category is present
    /// or the total is not positive.
    pub fn strong_buy_percent(snapshot: &FinancialSnapshot) -> Option<f64> {
        let ratings = snapshot.analyst_ratings.as_ref()?;
        let counts = [
            &ratings.strong_buy,
            &ratings.buy,
            &ratings.hold,
            &ratings.sell,
            &ratings.strong_sell,
        ]
        .map(|count| to_number(count.as_ref()));
        if counts.iter().all(Option::is_none) {
            return None;
        }
        let total: f64 = counts.iter().flatten().sum();
        if total <= 0.0 {
            return None;
        }
        Some(counts[0].unwrap_or(0.0) / total * 100.0)
    }

    /// Upside to `priceTargets.targetMean`, rebased on the baseline.
    pub fn upside_score(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        upside_percent(current_price(snapshot), target_mean(snapshot))
            .map(|upside| clamp_score(self.config.baseline + upside))
    }

    /// Score in [0, 100].
    pub fn score(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        average(&[
            Self::strong_buy_percent(snapshot),
            self.upside_score(snapshot),
        ])
        .map(clamp_score)
    }
}
