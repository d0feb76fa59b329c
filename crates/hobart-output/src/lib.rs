#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chart;
pub mod export;
pub mod markdown;
pub mod report;

pub use chart::{ChartKind, ChartSpec, Dataset, DEFAULT_PRICE_POINTS};
pub use export::{ExportError, ExportFormat, Exporter, RankingExport, ScorecardExport};
pub use markdown::{
    EntitySummary, fmt_percent, fmt_score, render_peers_report, render_sector_report,
    render_stock_report,
};
pub use report::{Report, ReportBuilder, ReportError, ReportKind};
