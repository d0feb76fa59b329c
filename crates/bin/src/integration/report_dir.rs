//! Where reports are written.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the default report directory.
pub(crate) const REPORT_DIR_ENV: &str = "HOBART_REPORT_DIR";

/// Get the default report directory path.
///
/// Uses platform-specific data directories:
/// - Linux: `~/.local/share/hobart/reports/`
/// - macOS: `~/Library/Application Support/hobart/reports/`
/// - Windows: `%APPDATA%\hobart\reports\`
pub(crate) fn default_report_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hobart")
        .join("reports")
}

/// `--out`, else `HOBART_REPORT_DIR`, else the platform default.
pub(crate) fn resolve_report_dir(out: Option<PathBuf>) -> PathBuf {
    resolve_with_env(out, std::env::var_os(REPORT_DIR_ENV))
}

fn resolve_with_env(out: Option<PathBuf>, env: Option<OsString>) -> PathBuf {
    out.or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .unwrap_or_else(default_report_dir)
}
