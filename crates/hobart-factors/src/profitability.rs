//! Profitability component
//!
//! Average of gross margin, operating margin and return on equity, all as
//! normalized percentages.

use crate::component::{ComponentKind, ScoreComponent};
use crate::extract::{gross_margin, operating_margin, return_on_equity};
use crate::normalize::{average, clamp_score};
use hobart_data::FinancialSnapshot;

/// Profitability scores margins and ROE
#[derive(Debug, Default, Clone, Copy)]
pub struct ProfitabilityComponent;

impl ScoreComponent for ProfitabilityComponent {
    fn name(&self) -> &str {
        "profitability"
    }

    fn kind(&self) -> ComponentKind {
        ComponentKind::Profitability
    }

    fn score(&self, snapshot: &FinancialSnapshot) -> Option<f64> {
        average(&[
            gross_margin(snapshot),
            operating_margin(snapshot),
            return_on_equity(snapshot),
        ])
        .map(clamp_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hobart_data::Overview;
    use serde_json::json;

    #[test]
    fn test_profitability_mixes_metric_and_overview_sources() {
        let mut snapshot = FinancialSnapshot::new("TEST");
        snapshot.basic_financials =
            Some(serde_json::from_value(json!({"metric": {"grossMarginTTM": 60}})).unwrap());
        snapshot.overview = Some(Overview {
            operating_margin: Some(json!("0.30")),
            return_on_equity: Some(json!("0.45")),
            ..Overview::default()
        });

        assert_relative_eq!(
            ProfitabilityComponent.score(&snapshot).unwrap(),
            45.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_profitability_absent() {
        assert_eq!(
            ProfitabilityComponent.score(&FinancialSnapshot::new("TEST")),
            None
        );
    }
}
