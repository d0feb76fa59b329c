//! Report values and write-once persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A report with the same file name already exists.
    #[error("Report already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The report has no title.
    #[error("Report title is required")]
    MissingTitle,
}

/// Report flavor, used as the file name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Single-stock scorecard
    Stock,
    /// Sector or thematic basket
    Sector,
    /// Peer comparison
    Peers,
}

impl ReportKind {
    /// File name prefix.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Sector => "sector",
            Self::Peers => "peers",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered research report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report title.
    pub title: String,

    /// Report flavor.
    pub kind: ReportKind,

    /// Symbols covered.
    pub symbols: Vec<String>,

    /// Markdown body.
    pub body: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,
}

impl Report {
    /// Create a new report stamped now.
    pub fn new(title: String, kind: ReportKind, symbols: Vec<String>, body: String) -> Self {
        Self {
            title,
            kind,
            symbols,
            body,
            timestamp: Utc::now(),
        }
    }

    /// `<kind>-<slug>-<YYYYMMDD>.md`
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}-{}.md",
            self.kind,
            slugify(&self.title),
            self.timestamp.format("%Y%m%d")
        )
    }

    /// Full markdown document: title, metadata line, body.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("# {}\n\n", self.title));
        output.push_str(&format!(
            "_Generated {}_",
            self.timestamp.format("%Y-%m-%d %H:%M UTC")
        ));
        if !self.symbols.is_empty() {
            output.push_str(&format!(" | _Symbols: {}_", self.symbols.join(", ")));
        }
        output.push_str("\n\n");
        output.push_str(&self.body);
        if !self.body.ends_with('\n') {
            output.push('\n');
        }
        output
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the markdown into `dir`, creating it if needed.
    ///
    /// Fails with [`ReportError::AlreadyExists`] rather than overwrite.
    pub fn write_once(&self, dir: &Path) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ReportError::AlreadyExists(path));
            }
            Err(err) => return Err(err.into()),
        };
        file.write_all(self.to_markdown().as_bytes())?;
        info!(path = %path.display(), kind = %self.kind, "wrote report");
        Ok(path)
    }
}

/// Lower-case ASCII alphanumerics joined by single hyphens.
pub fn slugify(text: &str) -> String {
    let slug = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "report".to_string()
    } else {
        slug
    }
}

/// Builder for creating reports.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    title: Option<String>,
    kind: Option<ReportKind>,
    symbols: Vec<String>,
    body: String,
    timestamp: Option<DateTime<Utc>>,
}

impl ReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the report kind (default: stock).
    pub const fn kind(mut self, kind: ReportKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Add one covered symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Set all covered symbols.
    pub fn symbols(mut self, symbols: Vec<String>) -> Self {
        self.symbols = symbols;
        self
    }

    /// Set the markdown body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Override the timestamp.
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Build the report.
    pub fn build(self) -> Result<Report, ReportError> {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or(ReportError::MissingTitle)?;
        let mut report = Report::new(
            title,
            self.kind.unwrap_or(ReportKind::Stock),
            self.symbols,
            self.body,
        );
        if let Some(timestamp) = self.timestamp {
            report.timestamp = timestamp;
        }
        Ok(report)
    }
}
