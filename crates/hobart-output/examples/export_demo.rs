//! Demonstration of the export functionality in hobart-output.
//!
//! Run with: cargo run --example export_demo -p hobart-output

use hobart_data::{FinancialSnapshot, Overview};
use hobart_factors::compute_scorecard;
use hobart_output::{ExportFormat, Exporter, RankingExport, ScorecardExport};
use hobart_rank::{ScoredEntity, allocate_top_n, rank_and_classify};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Hobart Export Demo ===\n");

    let snapshots: Vec<FinancialSnapshot> = [("AMD", 45.0), ("AVGO", 30.0), ("MRVL", 18.0)]
        .into_iter()
        .map(|(symbol, pe)| {
            let mut snapshot = FinancialSnapshot::new(symbol);
            snapshot.overview = Some(Overview {
                pe_ratio: Some(json!(pe)),
                ..Overview::default()
            });
            snapshot
        })
        .collect();

    let cards: Vec<_> = snapshots.iter().map(compute_scorecard).collect();

    println!("1. Scorecards (CSV)\n");
    let records: Vec<ScorecardExport> = cards.iter().map(ScorecardExport::from).collect();
    println!("{}", records.export_to_string(ExportFormat::Csv)?);

    println!("2. Rankings (pretty JSON)\n");
    let entities: Vec<ScoredEntity> = cards.iter().map(ScoredEntity::from).collect();
    let rankings: Vec<RankingExport> = rank_and_classify(&entities)
        .iter()
        .map(RankingExport::from)
        .collect();
    println!("{}\n", rankings.export_to_string(ExportFormat::PrettyJson)?);

    println!("3. Allocation (CSV)\n");
    let allocation = allocate_top_n(&entities, 3);
    println!("{}", allocation.export_to_string(ExportFormat::Csv)?);

    Ok(())
}
