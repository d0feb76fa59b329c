//! Markdown report bodies.
//!
//! Renderers return the body only; [`crate::Report::to_markdown`] adds the
//! title and metadata line. Absent values print as `n/a`.

use crate::chart::{ChartSpec, DEFAULT_PRICE_POINTS};
use crate::report::ReportError;
use hobart_data::FinancialSnapshot;
use hobart_factors::extract::{
    OverviewField, change_percent, current_price, eps, eps_growth, gross_margin,
    operating_margin, pe_ratio, return_on_equity, revenue_growth, sma50_trend, target_price,
    target_upside,
};
use hobart_factors::moat::MoatFactor;
use hobart_factors::{ComponentKind, CompositeWeights, Scorecard};
use hobart_rank::{Allocation, Layer, RankedEntity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const MISSING: &str = "n/a";

/// Descriptive data for one entity in a multi-entity report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    /// Entity symbol
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Infrastructure layer
    pub layer: Layer,
    /// Computed scorecard
    pub scorecard: Scorecard,
}

impl EntitySummary {
    /// Summary of a scored snapshot.
    pub fn new(snapshot: &FinancialSnapshot, layer: Layer, scorecard: Scorecard) -> Self {
        Self {
            symbol: snapshot.symbol.clone(),
            name: snapshot.display_name().to_string(),
            layer,
            scorecard,
        }
    }
}

/// Two-decimal score or `n/a`.
pub fn fmt_score(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.2}"))
}

/// Two-decimal percentage or `n/a`.
pub fn fmt_percent(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.2}%"))
}

/// Dollar amount or `n/a`.
pub fn fmt_price(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("${v:.2}"))
}

/// Dollar amount with a T/B/M suffix, or `n/a`.
pub fn fmt_large(value: Option<f64>) -> String {
    let Some(v) = value else {
        return MISSING.to_string();
    };
    let abs = v.abs();
    if abs >= 1e12 {
        format!("${:.2}T", v / 1e12)
    } else if abs >= 1e9 {
        format!("${:.2}B", v / 1e9)
    } else if abs >= 1e6 {
        format!("${:.2}M", v / 1e6)
    } else {
        format!("${v:.0}")
    }
}

fn fmt_rank(entity: &RankedEntity) -> String {
    entity
        .rank
        .map_or_else(|| "-".to_string(), |rank| rank.to_string())
}

/// Single-stock body: scorecard, moat details, key metrics, price chart.
pub fn render_stock_report(
    snapshot: &FinancialSnapshot,
    scorecard: &Scorecard,
    layer: Layer,
    weights: &CompositeWeights,
) -> Result<String, ReportError> {
    let mut output = String::new();

    output.push_str(&format!(
        "**{}** ({}) | **Layer:** {}\n\n",
        snapshot.display_name(),
        snapshot.symbol,
        layer
    ));

    output.push_str("## Scorecard\n\n");
    output.push_str("| Component | Score | Weight |\n");
    output.push_str("|-----------|-------|--------|\n");
    for (kind, score) in scorecard.components.iter() {
        output.push_str(&format!(
            "| {} | {} | {:.0}% |\n",
            kind.label(),
            fmt_score(score),
            weights.weight(kind) * 100.0
        ));
    }
    output.push_str(&format!(
        "| **Composite** | **{}** | |\n\n",
        fmt_score(scorecard.composite)
    ));

    output.push_str("## Moat Details\n\n");
    output.push_str("| Factor | Score |\n");
    output.push_str("|--------|-------|\n");
    for factor in MoatFactor::ALL {
        output.push_str(&format!(
            "| {} | {} |\n",
            factor.label(),
            fmt_score(scorecard.moat_details.get(factor))
        ));
    }
    output.push('\n');

    output.push_str("## Key Metrics\n\n");
    output.push_str("| Metric | Value |\n");
    output.push_str("|--------|-------|\n");
    let low = OverviewField::FiftyTwoWeekLow.number(snapshot);
    let high = OverviewField::FiftyTwoWeekHigh.number(snapshot);
    let metrics = [
        ("Price", fmt_price(current_price(snapshot))),
        ("Change", fmt_percent(change_percent(snapshot))),
        ("Market Cap", fmt_large(OverviewField::MarketCap.number(snapshot))),
        ("P/E", fmt_score(pe_ratio(snapshot))),
        ("EPS", fmt_price(eps(snapshot))),
        ("Revenue Growth", fmt_percent(revenue_growth(snapshot))),
        ("EPS Growth", fmt_percent(eps_growth(snapshot))),
        ("Gross Margin", fmt_percent(gross_margin(snapshot))),
        ("Operating Margin", fmt_percent(operating_margin(snapshot))),
        ("ROE", fmt_percent(return_on_equity(snapshot))),
        ("Target Price", fmt_price(target_price(snapshot))),
        ("Target Upside", fmt_percent(target_upside(snapshot))),
        ("vs 50-Day SMA", fmt_percent(sma50_trend(snapshot))),
        ("52-Week Range", format!("{} - {}", fmt_price(low), fmt_price(high))),
    ];
    for (label, value) in metrics {
        output.push_str(&format!("| {label} | {value} |\n"));
    }
    output.push('\n');

    if let Some(chart) = ChartSpec::price_history(snapshot, DEFAULT_PRICE_POINTS) {
        output.push_str("## Price History\n\n");
        output.push_str(&chart.to_block()?);
        output.push('\n');
    }

    Ok(output)
}

fn index_by_symbol(rows: &[EntitySummary]) -> HashMap<&str, &EntitySummary> {
    rows.iter().map(|row| (row.symbol.as_str(), row)).collect()
}

/// Sector body: layer breakdown, ranked table, allocation.
pub fn render_sector_report(
    rows: &[EntitySummary],
    ranked: &[RankedEntity],
    allocations: &[Allocation],
) -> Result<String, ReportError> {
    let by_symbol = index_by_symbol(rows);
    let mut output = String::new();

    output.push_str("## Layer Breakdown\n\n");
    output.push_str("| Layer | Count | Symbols |\n");
    output.push_str("|-------|-------|---------|\n");
    for layer in Layer::ALL {
        let symbols: Vec<&str> = rows
            .iter()
            .filter(|row| row.layer == layer)
            .map(|row| row.symbol.as_str())
            .collect();
        if !symbols.is_empty() {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                layer,
                symbols.len(),
                symbols.join(", ")
            ));
        }
    }
    output.push('\n');

    output.push_str("## Rankings\n\n");
    output.push_str("| Rank | Symbol | Name | Layer | Composite | Tier |\n");
    output.push_str("|------|--------|------|-------|-----------|------|\n");
    for entity in ranked {
        let row = by_symbol.get(entity.symbol.as_str());
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            fmt_rank(entity),
            entity.symbol,
            row.map_or(MISSING, |r| r.name.as_str()),
            row.map_or(MISSING, |r| r.layer.name()),
            fmt_score(entity.composite),
            entity.tier
        ));
    }
    output.push('\n');

    output.push_str("## Allocation\n\n");
    if allocations.is_empty() {
        output.push_str("No entity has enough data for an allocation.\n");
        return Ok(output);
    }
    output.push_str("| Symbol | Composite | Weight |\n");
    output.push_str("|--------|-----------|--------|\n");
    for allocation in allocations {
        output.push_str(&format!(
            "| {} | {:.2} | {:.2}% |\n",
            allocation.symbol, allocation.composite, allocation.weight
        ));
    }
    output.push('\n');
    if let Some(chart) = ChartSpec::allocation_pie("Allocation", allocations) {
        output.push_str(&chart.to_block()?);
    }

    Ok(output)
}

/// Peer comparison body: component table in rank order, composite bar chart.
pub fn render_peers_report(
    rows: &[EntitySummary],
    ranked: &[RankedEntity],
) -> Result<String, ReportError> {
    let by_symbol = index_by_symbol(rows);
    let mut output = String::new();

    output.push_str("## Peer Comparison\n\n");
    output.push_str("| Rank | Symbol |");
    for kind in ComponentKind::ALL {
        output.push_str(&format!(" {} |", kind.label()));
    }
    output.push_str(" Composite | Tier |\n");
    output.push_str("|------|--------|");
    for _ in ComponentKind::ALL {
        output.push_str("------|");
    }
    output.push_str("-----------|------|\n");

    for entity in ranked {
        output.push_str(&format!("| {} | {} |", fmt_rank(entity), entity.symbol));
        let card = by_symbol.get(entity.symbol.as_str()).map(|r| &r.scorecard);
        for kind in ComponentKind::ALL {
            let score = card.and_then(|c| c.components.get(kind));
            output.push_str(&format!(" {} |", fmt_score(score)));
        }
        output.push_str(&format!(
            " {} | {} |\n",
            fmt_score(entity.composite),
            entity.tier
        ));
    }
    output.push('\n');

    if let Some(chart) = ChartSpec::composite_bars("Composite Scores", ranked) {
        output.push_str(&chart.to_block()?);
    }

    Ok(output)
}
