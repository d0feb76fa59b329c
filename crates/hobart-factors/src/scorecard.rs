//! Scorecard engine
//!
//! Turns one [`FinancialSnapshot`] into a [`Scorecard`]. The engine never
//! fails: every missing or malformed input degrades the affected score to
//! absent, and in the worst case the composite itself is absent.

use crate::component::{ComponentKind, ConfigurableComponent, ScoreComponent};
use crate::composite::{ComponentScores, CompositeWeights, composite_score};
use crate::growth::GrowthComponent;
use crate::moat::{MoatComponent, MoatConfig, MoatDetails};
use crate::momentum::{MomentumComponent, MomentumConfig};
use crate::profitability::ProfitabilityComponent;
use crate::valuation::{ValuationComponent, ValuationConfig};
use hobart_data::FinancialSnapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scoring parameters for every component plus the composite weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Composite weights
    pub weights: CompositeWeights,
    /// Valuation parameters
    pub valuation: ValuationConfig,
    /// Momentum parameters
    pub momentum: MomentumConfig,
    /// Moat parameters
    pub moat: MoatConfig,
}

/// Derived scores for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    /// Entity symbol
    pub symbol: String,
    /// The five component scores
    pub components: ComponentScores,
    /// Moat sub-factor scores
    pub moat_details: MoatDetails,
    /// Weighted composite, absent when no component is present
    pub composite: Option<f64>,
}

impl Scorecard {
    /// Whether any component could be scored.
    pub const fn has_composite(&self) -> bool {
        self.composite.is_some()
    }
}

/// Computes scorecards with a fixed [`ScoringConfig`].
#[derive(Debug)]
pub struct ScorecardEngine {
    weights: CompositeWeights,
    components: Vec<Box<dyn ScoreComponent>>,
    moat: MoatComponent,
}

impl ScorecardEngine {
    /// Build an engine from explicit parameters.
    pub fn new(config: ScoringConfig) -> Self {
        let components: Vec<Box<dyn ScoreComponent>> = vec![
            Box::new(GrowthComponent),
            Box::new(ProfitabilityComponent),
            Box::new(ValuationComponent::with_config(config.valuation)),
            Box::new(MomentumComponent::with_config(config.momentum)),
        ];
        Self {
            weights: config.weights,
            components,
            moat: MoatComponent::with_config(config.moat),
        }
    }

    /// Composite weights in use.
    pub const fn weights(&self) -> &CompositeWeights {
        &self.weights
    }

    /// Score a snapshot.
    pub fn compute(&self, snapshot: &FinancialSnapshot) -> Scorecard {
        let mut components = ComponentScores::default();
        for component in &self.components {
            components.set(component.kind(), component.score(snapshot));
        }

        let moat_details = self.moat.details(snapshot);
        components.set(ComponentKind::Moat, moat_details.overall());

        for (kind, score) in components.iter() {
            if score.is_none() {
                debug!(symbol = %snapshot.symbol, component = kind.name(), "component absent");
            }
        }

        let composite = composite_score(&components, &self.weights);
        debug!(
            symbol = %snapshot.symbol,
            present = components.present_count(),
            composite = ?composite,
            "computed scorecard"
        );

        Scorecard {
            symbol: snapshot.symbol.clone(),
            components,
            moat_details,
            composite,
        }
    }

    /// Score many snapshots, preserving order.
    pub fn compute_all<'a, I>(&self, snapshots: I) -> Vec<Scorecard>
    where
        I: IntoIterator<Item = &'a FinancialSnapshot>,
    {
        snapshots
            .into_iter()
            .map(|snapshot| self.compute(snapshot))
            .collect()
    }
}

impl Default for ScorecardEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// Score a snapshot with the default configuration.
pub fn compute_scorecard(snapshot: &FinancialSnapshot) -> Scorecard {
    ScorecardEngine::default().compute(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hobart_data::Overview;
    use serde_json::json;

    #[test]
    fn test_pe_only_snapshot() {
        let mut snapshot = FinancialSnapshot::new("PEO");
        snapshot.overview = Some(Overview {
            pe_ratio: Some(json!(25)),
            ..Overview::default()
        });

        let card = compute_scorecard(&snapshot);
        assert_relative_eq!(card.components.valuation.unwrap(), 50.0);
        assert_eq!(card.components.present_count(), 1);
        assert_eq!(card.moat_details, MoatDetails::default());
        assert_relative_eq!(card.composite.unwrap(), 50.0);
    }

    #[test]
    fn test_empty_snapshot_has_no_composite() {
        let card = compute_scorecard(&FinancialSnapshot::new("NONE"));
        assert!(!card.has_composite());
        assert_eq!(card.components, ComponentScores::default());
    }

    #[test]
    fn test_config_is_applied() {
        let mut snapshot = FinancialSnapshot::new("PEO");
        snapshot.overview = Some(Overview {
            pe_ratio: Some(json!(25)),
            ..Overview::default()
        });
        let engine = ScorecardEngine::new(ScoringConfig {
            valuation: ValuationConfig { pe_ceiling: 100.0 },
            ..ScoringConfig::default()
        });
        assert_relative_eq!(engine.compute(&snapshot).composite.unwrap(), 75.0);
    }

    #[test]
    fn test_config_deserializes_partially() {
        let config: ScoringConfig =
            serde_json::from_value(json!({"weights": {"momentum": 0.5}})).unwrap();
        assert_relative_eq!(config.weights.momentum, 0.5);
        assert_relative_eq!(config.weights.growth, 0.25);
        assert_relative_eq!(config.valuation.pe_ceiling, 50.0);
    }

    #[test]
    fn test_nested_config_keys_are_camel_case() {
        let config: ScoringConfig = serde_json::from_value(json!({
            "valuation": {"peCeiling": 40},
            "momentum": {"minPoints": 5},
            "moat": {"marginStability": {"maxPeriods": 4, "penaltyScale": 5}}
        }))
        .unwrap();
        assert_relative_eq!(config.valuation.pe_ceiling, 40.0);
        assert_eq!(config.momentum.min_points, 5);
        assert_eq!(config.moat.margin_stability.max_periods, 4);
        assert_eq!(config.moat.margin_stability.min_periods, 3);
        assert_relative_eq!(config.moat.margin_stability.penalty_scale, 5.0);

        let json = serde_json::to_value(ScoringConfig::default()).unwrap();
        assert!(json["valuation"].get("peCeiling").is_some());
        assert!(json["momentum"].get("min_points").is_none());
    }

    #[test]
    fn test_scorecard_json_shape() {
        let json = serde_json::to_value(compute_scorecard(&FinancialSnapshot::new("X"))).unwrap();
        assert!(json.get("moatDetails").is_some());
        assert!(json["composite"].is_null());
    }
}
