//! Valuation component
//!
//! Linear inverse of the P/E ratio: P/E 0 scores 100 and P/E at the ceiling
//! scores 0. Zero and negative P/E are excluded rather than scored as cheap.

use crate::component::{ComponentKind, ConfigurableComponent, ScoreComponent};
use crate::extract::pe_ratio;
use crate::normalize::clamp_score;
use hobart_data::FinancialSnapshot;
use serde::{Deserialize, Serialize};

/// Configuration for the Valuation component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValuationConfig {
    /// P/E ratio that maps to a score of 0 (default: 50)
    pub pe_ceiling: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self { pe_ceiling: 50.0 }
    }
}

/// Valuation scores cheapness by P/E
#[derive(Debug, Clone)]
pub struct ValuationComponent {
    config: ValuationConfig,
}

impl ScoreComponent for ValuationComponent {
    fn name(&self) -> &str {
        "valuation"
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Valuation
    }

    fn score(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        let pe = pe_ratio(snapshot).filter(|pe| *pe > 0.0)?;
        let ceiling = self.config.pe_ceiling;
        if ceiling <= 0.0 {
            return None;
        }
        Some(clamp_score(100.0 - (pe / ceiling) * 100.0))
    }
}

impl ConfigurableComponent for ValuationComponent {
    type Config = ValuationConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

impl Default for ValuationComponent {
    fn default() -> Self {
        Self::with_config(ValuationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hobart_data::Overview;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn with_pe(pe: Value) -> FinancialSnapshot {
        let mut snapshot = FinancialSnapshot::new("TEST");
        snapshot.overview = Some(Overview {
            pe_ratio: Some(pe),
            ..Overview::default()
        });
        snapshot
    }

    #[rstest]
    #[case(json!(25), Some(50.0))]
    #[case(json!("10"), Some(80.0))]
    #[case(json!(50), Some(0.0))]
    #[case(json!(120), Some(0.0))]
    #[case(json!(0), None)]
    #[case(json!(-8.5), None)]
    #[case(json!("None"), None)]
    fn test_valuation(#[case] pe: Value, #[case] expected: Option<f64>) {
        let score = ValuationComponent::default().score(&with_pe(pe));
        match expected {
            Some(expected) => assert_relative_eq!(score.unwrap(), expected),
            None => assert_eq!(score, None),
        }
    }

    #[test]
    fn test_valuation_custom_ceiling() {
        let component = ValuationComponent::with_config(ValuationConfig { pe_ceiling: 100.0 });
        assert_relative_eq!(component.score(&with_pe(json!(25))).unwrap(), 75.0);
        assert_relative_eq!(component.config().pe_ceiling, 100.0);
    }

    #[test]
    fn test_valuation_rejects_non_positive_ceiling() {
        let component = ValuationComponent::with_config(ValuationConfig { pe_ceiling: 0.0 });
        assert_eq!(component.score(&with_pe(json!(25))), None);
    }
}
