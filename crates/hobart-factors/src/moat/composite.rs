//! Composite Moat Component
//!
//! Averages the three moat sub-factors into the moat slot of the scorecard.

use super::{
    AnalystConvictionConfig, AnalystConvictionFactor, MarginStabilityConfig,
    MarginStabilityFactor, MoatFactor, PricingPowerFactor,
};
use crate::component::{ComponentKind, ConfigurableComponent, ScoreComponent};
use crate::normalize::{average, clamp_score};
use hobart_data::FinancialSnapshot;
use serde::{Deserialize, Serialize};

/// Configuration for the composite Moat component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MoatConfig {
    /// Margin stability parameters
    pub margin_stability: MarginStabilityConfig,
    /// Analyst conviction parameters
    pub analyst_conviction: AnalystConvictionConfig,
}

/// Per-factor moat scores, each in [0, 100] or absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoatDetails {
    /// Margin stability score
    pub margin_stability: Option<f64>,
    /// Pricing power score
    pub pricing_power: Option<f64>,
    /// Analyst conviction score
    pub analyst_conviction: Option<f64>,
}

impl MoatDetails {
    /// Score of one sub-factor.
    pub const fn get(&self, factor: MoatFactor) -> Option<f64> {
        match factor {
            MoatFactor::MarginStability => self.margin_stability,
            MoatFactor::PricingPower => self.pricing_power,
            MoatFactor::AnalystConviction => self.analyst_conviction,
        }
    }

    /// Moat score: clamped average of the present sub-factors.
    pub fn overall(&self) -> Option<f64> {
        average(&[
            self.margin_stability,
            self.pricing_power,
            self.analyst_conviction,
        ])
        .map(clamp_score)
    }
}

/// Moat combines margin stability, pricing power and analyst conviction
#[derive(Debug, Clone)]
pub struct MoatComponent {
    config: MoatConfig,
    margin_stability: MarginStabilityFactor,
    analyst_conviction: AnalystConvictionFactor,
}

impl MoatComponent {
    /// Score every sub-factor.
    pub fn details(&self, snapshot: &FinancialSnapshot) -> MoatDetails {
        MoatDetails {
            margin_stability: self.margin_stability.score(snapshot),
            pricing_power: PricingPowerFactor.score(snapshot),
            analyst_conviction: self.analyst_conviction.score(snapshot),
        }
    }
}

impl ScoreComponent for MoatComponent {
    fn name(&self) -> &str {
        "moat"
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Moat
    }

    fn score(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        self.details(snapshot).overall()
    }
}

impl ConfigurableComponent for MoatComponent {
    type Config = MoatConfig;

    fn with_config(config: Self::Config) -> Self {
        Self {
            margin_stability: MarginStabilityFactor::with_config(config.margin_stability.clone()),
            analyst_conviction: AnalystConvictionFactor::with_config(
                config.analyst_conviction.clone(),
            ),
            config,
        }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

impl Default for MoatComponent {
    fn default() -> Self {
        Self::with_config(MoatConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_overall_averages_present_factors() {
        let details = MoatDetails {
            margin_stability: Some(90.0),
            pricing_power: None,
            analyst_conviction: Some(60.0),
        };
        assert_relative_eq!(details.overall().unwrap(), 75.0);
        assert_eq!(details.get(MoatFactor::PricingPower), None);
    }

    #[test]
    fn test_overall_absent_when_empty() {
        assert_eq!(MoatDetails::default().overall(), None);
    }

    #[test]
    fn test_component_on_empty_snapshot() {
        let moat = MoatComponent::default();
        let snapshot = FinancialSnapshot::new("TEST");
        assert_eq!(moat.details(&snapshot), MoatDetails::default());
        assert_eq!(moat.score(&snapshot), None);
    }
}
