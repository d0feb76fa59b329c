//! `--format` values.

use hobart_output::{ExportError, ExportFormat};
use serde::Serialize;
use std::str::FromStr;

/// Terminal text, or one of the export formats (`csv`, `json`, `pretty`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Export(ExportFormat),
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else {
            s.parse().map(Self::Export)
        }
    }
}

/// Serialize a nested value as JSON; CSV cannot represent it.
pub(crate) fn to_json<T: Serialize>(value: &T, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string(value)?),
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(value)?),
        ExportFormat::Csv => Err(ExportError::InvalidFormat(
            "csv is not available for nested output".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(
            " CSV ".parse::<OutputFormat>().unwrap(),
            OutputFormat::Export(ExportFormat::Csv)
        );
        assert_eq!(
            "pretty".parse::<OutputFormat>().unwrap(),
            OutputFormat::Export(ExportFormat::PrettyJson)
        );
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, ExportError::InvalidFormat(ref f) if f == "yaml"));
    }

    #[test]
    fn test_to_json() {
        let value = serde_json::json!({"a": [1, 2]});
        assert_eq!(to_json(&value, ExportFormat::Json).unwrap(), r#"{"a":[1,2]}"#);
        assert!(to_json(&value, ExportFormat::PrettyJson).unwrap().contains('\n'));
        assert!(matches!(
            to_json(&value, ExportFormat::Csv),
            Err(ExportError::InvalidFormat(_))
        ));
    }
}
