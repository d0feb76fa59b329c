//! Recommendation tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommendation derived from a percentile rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    /// Top of the ranked set
    Overweight,
    /// Middle of the ranked set
    Neutral,
    /// Bottom of the ranked set
    Underweight,
    /// No composite score; never ranked
    InsufficientData,
}

impl RecommendationTier {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overweight => "Overweight",
            Self::Neutral => "Neutral",
            Self::Underweight => "Underweight",
            Self::InsufficientData => "Insufficient Data",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentile cut-offs for the tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TierThresholds {
    /// Minimum percentile for Overweight (default: 0.67)
    pub overweight: f64,
    /// Minimum percentile for Neutral (default: 0.34)
    pub neutral: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            overweight: 0.67,
            neutral: 0.34,
        }
    }
}

impl TierThresholds {
    /// Tier for a percentile; `None` means insufficient data.
    pub fn classify(&self, percentile: Option<f64>) -> RecommendationTier {
        match percentile {
            Some(p) if p >= self.overweight => RecommendationTier::Overweight,
            Some(p) if p >= self.neutral => RecommendationTier::Neutral,
            Some(_) => RecommendationTier::Underweight,
            None => RecommendationTier::InsufficientData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1.0), RecommendationTier::Overweight)]
    #[case(Some(0.67), RecommendationTier::Overweight)]
    #[case(Some(0.669), RecommendationTier::Neutral)]
    #[case(Some(0.5), RecommendationTier::Neutral)]
    #[case(Some(0.34), RecommendationTier::Neutral)]
    #[case(Some(0.339), RecommendationTier::Underweight)]
    #[case(Some(0.0), RecommendationTier::Underweight)]
    #[case(None, RecommendationTier::InsufficientData)]
    fn test_classify(#[case] percentile: Option<f64>, #[case] expected: RecommendationTier) {
        assert_eq!(TierThresholds::default().classify(percentile), expected);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RecommendationTier::InsufficientData.to_string(), "Insufficient Data");
    }
}
