//! Reading snapshot JSON files from disk.

use crate::error::{DataError, Result};
use crate::snapshot::FinancialSnapshot;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read one snapshot file.
///
/// When the file carries no `symbol`, the upper-cased file stem is used.
pub fn read_snapshot(path: &Path) -> Result<FinancialSnapshot> {
    let content = fs::read_to_string(path)?;
    let mut snapshot: FinancialSnapshot =
        serde_json::from_str(&content).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if snapshot.symbol.trim().is_empty() {
        snapshot.symbol = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_uppercase)
            .ok_or_else(|| DataError::InvalidSymbol(path.display().to_string()))?;
    }

    debug!(symbol = %snapshot.symbol, path = %path.display(), "loaded snapshot");
    Ok(snapshot)
}

/// List every `*.json` file in `dir`, sorted by file name.
pub fn list_snapshot_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(DataError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if path.is_file() && is_json {
            files.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-snapshot entry");
        }
    }

    files.sort();
    Ok(files)
}

/// Read every snapshot in `dir`.
///
/// Fails on the first file that cannot be read or parsed.
pub fn read_snapshot_dir(dir: &Path) -> Result<Vec<FinancialSnapshot>> {
    list_snapshot_files(dir)?
        .iter()
        .map(|path| read_snapshot(path))
        .collect()
}
