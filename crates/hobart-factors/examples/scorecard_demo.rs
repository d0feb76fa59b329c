//! Scorecard walkthrough
//!
//! Builds a snapshot by hand, scores it, and prints every component along
//! with the component registry.
//!
//! Run with: cargo run --example scorecard_demo -p hobart-factors

use hobart_data::{Overview, PriceHistory, PricePoint, SnapshotBuilder};
use hobart_factors::{ComponentKind, available_components, compute_scorecard};
use serde_json::json;

fn main() {
    println!("Hobart Scorecard Demo");
    println!("=====================\n");

    let snapshot = SnapshotBuilder::new("DEMO")
        .overview(Overview {
            name: Some("Demo Semiconductor Corp".into()),
            pe_ratio: Some(json!("32.5")),
            quarterly_revenue_growth: Some(json!("0.18")),
            operating_margin: Some(json!("0.27")),
            ..Overview::default()
        })
        .price_history(PriceHistory {
            prices: vec![
                PricePoint::new("2024-01-02", 48.0),
                PricePoint::new("2024-03-28", 55.5),
                PricePoint::new("2024-06-28", 61.2),
            ],
        })
        .build();

    let card = compute_scorecard(&snapshot);
    println!("{}", snapshot.display_name());
    for kind in ComponentKind::ALL {
        match card.components.get(kind) {
            Some(score) => println!("  {:15} {score:6.2}", kind.label()),
            None => println!("  {:15} {:>6}", kind.label(), "n/a"),
        }
    }
    match card.composite {
        Some(composite) => println!("  {:15} {composite:6.2}\n", "Composite"),
        None => println!("  {:15} {:>6}\n", "Composite", "n/a"),
    }

    println!("Registered components:");
    for info in available_components() {
        let weight = info
            .default_weight
            .map_or_else(|| "-".to_string(), |w| format!("{:.0}%", w * 100.0));
        println!("  {:20} {:>5}  {}", info.name, weight, info.description);
    }
}
