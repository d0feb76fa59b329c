//! Component Registry
//!
//! Static metadata for every scorecard component and moat sub-factor.

use crate::component::ComponentKind;
use crate::composite::CompositeWeights;
use serde::Serialize;

/// Component metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentInfo {
    /// Component name (unique identifier)
    pub name: &'static str,
    /// Composite slot the component contributes to
    pub kind: ComponentKind,
    /// Brief description of what the component measures
    pub description: &'static str,
    /// Default composite weight; `None` for moat sub-factors
    pub default_weight: Option<f64>,
    /// Snapshot inputs read by the component
    pub inputs: &'static [&'static str],
}

/// Get all available component info
pub fn available_components() -> Vec<ComponentInfo> {
    let weights = CompositeWeights::default();
    vec![
        ComponentInfo {
            name: "growth",
            kind: ComponentKind::Growth,
            description: "Average of revenue growth and EPS growth",
            default_weight: Some(weights.growth),
            inputs: &[
                "revenueGrowthTTM",
                "epsGrowthTTM",
                "overview.quarterlyRevenueGrowth",
                "overview.quarterlyEarningsGrowth",
            ],
        },
        ComponentInfo {
            name: "profitability",
            kind: ComponentKind::Profitability,
            description: "Average of gross margin, operating margin and ROE",
            default_weight: Some(weights.profitability),
            inputs: &["grossMarginTTM", "operatingMarginTTM", "roeTTM"],
        },
        ComponentInfo {
            name: "valuation",
            kind: ComponentKind::Valuation,
            description: "Linear inverse of P/E, zero at the P/E ceiling",
            default_weight: Some(weights.valuation),
            inputs: &["peTTM", "overview.peRatio"],
        },
        ComponentInfo {
            name: "momentum",
            kind: ComponentKind::Momentum,
            description: "Price change over the available history around a baseline of 50",
            default_weight: Some(weights.momentum),
            inputs: &["priceHistory.prices"],
        },
        ComponentInfo {
            name: "moat",
            kind: ComponentKind::Moat,
            description: "Average of margin stability, pricing power and analyst conviction",
            default_weight: Some(weights.moat),
            inputs: &["incomeStatement", "grossMarginTTM", "roeTTM", "analystRatings"],
        },
        ComponentInfo {
            name: "margin_stability",
            kind: ComponentKind::Moat,
            description: "Dispersion penalty on gross and operating margins over recent periods",
            default_weight: None,
            inputs: &["incomeStatement"],
        },
        ComponentInfo {
            name: "pricing_power",
            kind: ComponentKind::Moat,
            description: "Average of TTM gross margin and TTM ROE",
            default_weight: None,
            inputs: &["grossMarginTTM", "roeTTM"],
        },
        ComponentInfo {
            name: "analyst_conviction",
            kind: ComponentKind::Moat,
            description: "Strong-buy share blended with upside to the mean target",
            default_weight: None,
            inputs: &["analystRatings", "priceTargets.targetMean", "price.price"],
        },
    ]
}

/// Get components contributing to one composite slot
pub fn components_by_kind(kind: ComponentKind) -> Vec<ComponentInfo> {
    available_components()
        .into_iter()
        .filter(|c| c.kind == kind)
        .collect()
}

/// Get component info by name
pub fn get_component_info(name: &str) -> Option<ComponentInfo> {
    available_components().into_iter().find(|c| c.name == name)
}
