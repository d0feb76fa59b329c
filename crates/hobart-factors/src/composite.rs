//! Composite score
//!
//! Weighted blend of the five components. Weights are renormalized over the
//! components that are present, so a missing component neither counts as
//! zero nor drags the composite down.

use crate::component::ComponentKind;
use crate::normalize::clamp_score;
use serde::{Deserialize, Serialize};

/// Per-component weights for the composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompositeWeights {
    /// Growth weight (default: 0.25)
    pub growth: f64,
    /// Profitability weight (default: 0.20)
    pub profitability: f64,
    /// Valuation weight (default: 0.20)
    pub valuation: f64,
    /// Momentum weight (default: 0.15)
    pub momentum: f64,
    /// Moat weight (default: 0.20)
    pub moat: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            growth: 0.25,
            profitability: 0.20,
            valuation: 0.20,
            momentum: 0.15,
            moat: 0.20,
        }
    }
}

impl CompositeWeights {
    /// Weight of one component.
    pub const fn weight(&self, kind: ComponentKind) -> f64 {
        match kind {
            ComponentKind::Growth => self.growth,
            ComponentKind::Profitability => self.profitability,
            ComponentKind::Valuation => self.valuation,
            ComponentKind::Momentum => self.momentum,
            ComponentKind::Moat => self.moat,
        }
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        ComponentKind::ALL.iter().map(|kind| self.weight(*kind)).sum()
    }
}

/// The five component scores of a scorecard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
    /// Growth score
    pub growth: Option<f64>,
    /// Profitability score
    pub profitability: Option<f64>,
    /// Valuation score
    pub valuation: Option<f64>,
    /// Momentum score
    pub momentum: Option<f64>,
    /// Moat score
    pub moat: Option<f64>,
}

impl ComponentScores {
    /// Score of one component.
    pub const fn get(&self, kind: ComponentKind) -> Option<f64> {
        match kind {
            ComponentKind::Growth => self.growth,
            ComponentKind::Profitability => self.profitability,
            ComponentKind::Valuation => self.valuation,
            ComponentKind::Momentum => self.momentum,
            ComponentKind::Moat => self.moat,
        }
    }

    /// Set one component's score.
    pub const fn set(&mut self, kind: ComponentKind, score: Option<f64>) {
        let slot = match kind {
            ComponentKind::Growth => &mut self.growth,
            ComponentKind::Profitability => &mut self.profitability,
            ComponentKind::Valuation => &mut self.valuation,
            ComponentKind::Momentum => &mut self.momentum,
            ComponentKind::Moat => &mut self.moat,
        };
        *slot = score;
    }

    /// `(kind, score)` pairs in composite order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, Option<f64>)> + '_ {
        ComponentKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Number of present components.
    pub fn present_count(&self) -> usize {
        self.iter().filter(|(_, score)| score.is_some()).count()
    }
}

/// Weighted composite over the present components.
///
/// Absent when no component is present or the present weights sum to zero.
pub fn composite_score(scores: &ComponentScores, weights: &CompositeWeights) -> Option<f64> {
    let (weighted, mass) = scores
        .iter()
        .filter_map(|(kind, score)| score.map(|score| (score, weights.weight(kind))))
        .filter(|(score, weight)| score.is_finite() && weight.is_finite())
        .fold((0.0, 0.0), |(weighted, mass), (score, weight)| {
            (weighted + score * weight, mass + weight)
        });
    (mass > 0.0).then(|| clamp_score(weighted / mass))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert_relative_eq!(CompositeWeights::default().total(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_renormalizes_over_present() {
        let scores = ComponentScores {
            growth: Some(80.0),
            moat: Some(35.0),
            ..ComponentScores::default()
        };
        let expected = clamp_score(80.0 * (0.25 / 0.45) + 35.0 * (0.20 / 0.45));
        assert_relative_eq!(
            composite_score(&scores, &CompositeWeights::default()).unwrap(),
            expected
        );
    }

    #[test]
    fn test_single_component_collapses_to_itself() {
        let scores = ComponentScores {
            valuation: Some(50.0),
            ..ComponentScores::default()
        };
        assert_relative_eq!(
            composite_score(&scores, &CompositeWeights::default()).unwrap(),
            50.0
        );
    }

    #[test]
    fn test_absent_when_nothing_present() {
        assert_eq!(
            composite_score(&ComponentScores::default(), &CompositeWeights::default()),
            None
        );
    }

    #[test]
    fn test_absent_when_present_weights_are_zero() {
        let scores = ComponentScores {
            momentum: Some(70.0),
            ..ComponentScores::default()
        };
        let weights = CompositeWeights {
            momentum: 0.0,
            ..CompositeWeights::default()
        };
        assert_eq!(composite_score(&scores, &weights), None);
    }

    #[test]
    fn test_set_and_present_count() {
        let mut scores = ComponentScores::default();
        scores.set(ComponentKind::Momentum, Some(70.0));
        scores.set(ComponentKind::Growth, Some(10.0));
        assert_eq!(scores.present_count(), 2);
        assert_eq!(scores.get(ComponentKind::Momentum), Some(70.0));
    }

    #[test]
    fn test_scores_serialize_absent_as_null() {
        let json = serde_json::to_value(ComponentScores {
            growth: Some(12.5),
            ..ComponentScores::default()
        })
        .unwrap();
        assert_eq!(json["growth"], 12.5);
        assert!(json["moat"].is_null());
    }
}
