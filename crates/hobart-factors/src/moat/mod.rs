//! Moat - durability of the business franchise
//!
//! The moat score averages three sub-factors: margin stability across recent
//! income statements, pricing power from TTM margin and ROE, and analyst
//! conviction from ratings and price targets. Each sub-factor is absent-safe
//! on its own.

pub mod analyst_conviction;
pub mod composite;
pub mod margin_stability;
pub mod pricing_power;

pub use analyst_conviction::{AnalystConvictionConfig, AnalystConvictionFactor};
pub use composite::{MoatComponent, MoatConfig, MoatDetails};
pub use margin_stability::{MarginStabilityConfig, MarginStabilityFactor};
pub use pricing_power::PricingPowerFactor;

use serde::{Deserialize, Serialize};

/// The three moat sub-factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoatFactor {
    /// Dispersion of gross and operating margins
    MarginStability,
    /// TTM gross margin and ROE
    PricingPower,
    /// Strong-buy share and target upside
    AnalystConviction,
}

impl MoatFactor {
    /// All sub-factors in report order.
    pub const ALL: [Self; 3] = [
        Self::MarginStability,
        Self::PricingPower,
        Self::AnalystConviction,
    ];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::MarginStability => "Margin Stability",
            Self::PricingPower => "Pricing Power",
            Self::AnalystConviction => "Analyst Conviction",
        }
    }
}
