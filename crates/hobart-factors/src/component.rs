//! Scoring component traits.
//!
//! Every scorecard component maps one [`FinancialSnapshot`] to an optional
//! score in [0, 100]. A missing or unusable input yields `None`, never an
//! error and never a zero.

use hobart_data::FinancialSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level scorecard component kinds, in composite order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Revenue and EPS growth
    Growth,
    /// Margins and return on equity
    Profitability,
    /// Inverse P/E
    Valuation,
    /// Price change over the available history
    Momentum,
    /// Margin stability, pricing power and analyst conviction
    Moat,
}

impl ComponentKind {
    /// All kinds, in composite order.
    pub const ALL: [Self; 5] = [
        Self::Growth,
        Self::Profitability,
        Self::Valuation,
        Self::Momentum,
        Self::Moat,
    ];

    /// Machine name, as used in JSON output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Growth => "growth",
            Self::Profitability => "profitability",
            Self::Valuation => "valuation",
            Self::Momentum => "momentum",
            Self::Moat => "moat",
        }
    }

    /// Display label for reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Growth => "Growth",
            Self::Profitability => "Profitability",
            Self::Valuation => "Valuation",
            Self::Momentum => "Momentum",
            Self::Moat => "Moat",
        }
    }

    /// Parse a machine name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single scorecard component.
pub trait ScoreComponent: fmt::Debug + Send + Sync {
    /// Component name (unique identifier)
    fn name(&self) -> &str;

    /// Which composite slot this component fills
    fn kind(&self) -> ComponentKind;

    /// Score a snapshot; `None` when the inputs are missing or unusable
    fn score(&self, snapshot: &FinancialSnapshot) -> Option<f64>;
}

/// A component with tunable parameters.
pub trait ConfigurableComponent: ScoreComponent {
    /// Parameter set
    type Config: Default;

    /// Build with explicit parameters
    fn with_config(config: Self::Config) -> Self;

    /// Current parameters
    fn config(&self) -> &Self::Config;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("growth", Some(ComponentKind::Growth))]
    #[case(" Moat ", Some(ComponentKind::Moat))]
    #[case("VALUATION", Some(ComponentKind::Valuation))]
    #[case("size", None)]
    fn test_from_name(#[case] name: &str, #[case] expected: Option<ComponentKind>) {
        assert_eq!(ComponentKind::from_name(name), expected);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ComponentKind::Profitability).unwrap();
        assert_eq!(json, "\"profitability\"");
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(ComponentKind::Momentum.to_string(), "Momentum");
    }
}
