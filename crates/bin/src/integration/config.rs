//! Loading scoring and ranking parameters from a JSON file.

use crate::error::CliError;
use hobart_factors::ScoringConfig;
use hobart_rank::RankingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Everything the CLI can be configured with.
///
/// Scoring fields sit at the top level so a bare `ScoringConfig` file is
/// also accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CliConfig {
    #[serde(flatten)]
    pub(crate) scoring: ScoringConfig,
    pub(crate) ranking: RankingConfig,
}

/// Load the config file, or defaults when no path is given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<CliConfig, CliError> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };

    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

fn parse_config(content: &str) -> Result<CliConfig, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config(
            r#"{"weights": {"growth": 0.5}, "valuation": {"peCeiling": 40}, "ranking": {"maxPositions": 5}}"#,
        )
        .unwrap();

        assert!((config.scoring.weights.growth - 0.5).abs() < f64::EPSILON);
        assert!((config.scoring.weights.profitability - 0.20).abs() < f64::EPSILON);
        assert!((config.scoring.valuation.pe_ceiling - 40.0).abs() < f64::EPSILON);
        assert_eq!(config.ranking.max_positions, 5);
        assert_eq!(config.scoring.momentum, Default::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(parse_config("{}").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_missing_path_is_default() {
        assert_eq!(load_config(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_invalid_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"weights\": [").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }
}
