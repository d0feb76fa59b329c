//! Export of scorecards, rankings and allocations.
//!
//! CSV output is one flat record per entity; absent scores are empty cells.
//! JSON output mirrors the records.

use hobart_factors::Scorecard;
use hobart_rank::{Allocation, RankedEntity};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty" | "pretty-json" | "pretty_json" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// Flat scorecard record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorecardExport {
    /// Entity symbol.
    pub symbol: String,
    /// Growth score.
    pub growth: Option<f64>,
    /// Profitability score.
    pub profitability: Option<f64>,
    /// Valuation score.
    pub valuation: Option<f64>,
    /// Momentum score.
    pub momentum: Option<f64>,
    /// Moat score.
    pub moat: Option<f64>,
    /// Margin stability sub-score.
    pub margin_stability: Option<f64>,
    /// Pricing power sub-score.
    pub pricing_power: Option<f64>,
    /// Analyst conviction sub-score.
    pub analyst_conviction: Option<f64>,
    /// Composite score.
    pub composite: Option<f64>,
}

impl From<&Scorecard> for ScorecardExport {
    fn from(card: &Scorecard) -> Self {
        Self {
            symbol: card.symbol.clone(),
            growth: card.components.growth,
            profitability: card.components.profitability,
            valuation: card.components.valuation,
            momentum: card.components.momentum,
            moat: card.components.moat,
            margin_stability: card.moat_details.margin_stability,
            pricing_power: card.moat_details.pricing_power,
            analyst_conviction: card.moat_details.analyst_conviction,
            composite: card.composite,
        }
    }
}

/// Flat ranking record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingExport {
    /// 1-based rank, empty when unranked.
    pub rank: Option<usize>,
    /// Entity symbol.
    pub symbol: String,
    /// Composite score.
    pub composite: Option<f64>,
    /// Percentile in [0, 1].
    pub percentile: Option<f64>,
    /// Recommendation tier label.
    pub tier: String,
}

impl From<&RankedEntity> for RankingExport {
    fn from(entity: &RankedEntity) -> Self {
        Self {
            rank: entity.rank,
            symbol: entity.symbol.clone(),
            composite: entity.composite,
            percentile: entity.percentile,
            tier: entity.tier.label().to_string(),
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn export_records<T: Serialize>(records: &[T], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            for record in records {
                wtr.serialize(record)?;
            }
            let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
            String::from_utf8(bytes).map_err(|e| ExportError::InvalidFormat(e.to_string()))
        }
        ExportFormat::Json => Ok(serde_json::to_string(records)?),
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(records)?),
    }
}

impl Exporter for ScorecardExport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => export_records(std::slice::from_ref(self), format),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<ScorecardExport> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        export_records(self, format)
    }
}

impl Exporter for Vec<RankingExport> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        export_records(self, format)
    }
}

impl Exporter for Vec<Allocation> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        export_records(self, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobart_data::FinancialSnapshot;
    use hobart_factors::compute_scorecard;
    use hobart_rank::{ScoredEntity, allocate_top_n, rank_and_classify};
    use rstest::rstest;

    fn rankings() -> Vec<RankingExport> {
        rank_and_classify(&[
            ScoredEntity::new("AAPL", Some(72.5)),
            ScoredEntity::new("MSFT", None),
        ])
        .iter()
        .map(RankingExport::from)
        .collect()
    }

    #[rstest]
    #[case("csv", ExportFormat::Csv)]
    #[case("JSON", ExportFormat::Json)]
    #[case("pretty", ExportFormat::PrettyJson)]
    fn test_parse_format(#[case] input: &str, #[case] expected: ExportFormat) {
        assert_eq!(input.parse::<ExportFormat>().unwrap(), expected);
    }

    #[test]
    fn test_parse_format_rejects_unknown() {
        assert!(matches!(
            "xml".parse::<ExportFormat>(),
            Err(ExportError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }

    #[test]
    fn test_ranking_csv_leaves_absent_cells_empty() {
        let csv = rankings().export_to_string(ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("rank,symbol,composite,percentile,tier"));
        assert_eq!(lines.next(), Some("1,AAPL,72.5,1.0,Overweight"));
        assert_eq!(lines.next(), Some(",MSFT,,,Insufficient Data"));
    }

    #[test]
    fn test_ranking_json() {
        let json = rankings().export_to_string(ExportFormat::Json).unwrap();
        assert!(json.contains("\"AAPL\""));
        assert!(json.contains("\"rank\":null"));
    }

    #[test]
    fn test_scorecard_export() {
        let record = ScorecardExport::from(&compute_scorecard(&FinancialSnapshot::new("EMPTY")));
        let csv = record.export_to_string(ExportFormat::Csv).unwrap();
        assert!(csv.starts_with("symbol,growth,profitability"));
        assert!(csv.contains("EMPTY,,,"));

        let pretty = record.export_to_string(ExportFormat::PrettyJson).unwrap();
        assert!(pretty.contains("  ")); // Indentation indicates pretty format
    }

    #[test]
    fn test_allocation_export_to_file() {
        let allocations = allocate_top_n(
            &[ScoredEntity::new("A", Some(60.0)), ScoredEntity::new("B", Some(40.0))],
            5,
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("allocation.csv");
        allocations.export_to_file(&path, ExportFormat::Csv).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("symbol,composite,weight"));
        assert!(content.contains("A,60.0,"));
    }
}
