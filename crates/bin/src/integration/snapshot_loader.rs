//! Loading snapshot directories with a progress bar.

use hobart_data::files::{list_snapshot_files, read_snapshot};
use hobart_data::{FinancialSnapshot, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::info;

/// Read every snapshot in `dir`, reporting progress on stderr.
pub(crate) fn load_snapshot_dir(dir: &Path) -> Result<Vec<FinancialSnapshot>> {
    let files = list_snapshot_files(dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );

    let mut snapshots = Vec::with_capacity(files.len());
    for path in &files {
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            pb.set_message(name.to_string());
        }
        match read_snapshot(path) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => {
                pb.abandon_with_message("failed");
                return Err(e);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(dir = %dir.display(), count = snapshots.len(), "loaded snapshots");
    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hobart_data::DataError;

    #[test]
    fn test_loads_sorted_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"symbol": "BBB"}"#).unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"symbol": "AAA"}"#).unwrap();

        let snapshots = load_snapshot_dir(dir.path()).unwrap();
        let symbols: Vec<_> = snapshots.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_stops_on_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), "{oops").unwrap();

        let err = load_snapshot_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }
}
