//! Pricing Power
//!
//! Average of TTM gross margin and TTM ROE, read from the canonical metric
//! map only.

use crate::extract::metric_percent;
use crate::normalize::{average, clamp_score};
use hobart_data::FinancialSnapshot;

/// Canonical metric keys consulted for pricing power.
pub const PRICING_POWER_KEYS: [&str; 2] = ["grossMarginTTM", "roeTTM"];

/// PricingPower scores margin and return on equity strength
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingPowerFactor;

impl PricingPowerFactor {
    /// Score in [0, 100].
    pub fn score(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        let values = PRICING_POWER_KEYS.map(|key| metric_percent(snapshot, key));
        average(&values).map(clamp_score)
    }
}
