#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod files;
pub mod providers;
pub mod snapshot;

pub use builder::SnapshotBuilder;
pub use error::{DataError, Result};
pub use snapshot::{
    AnalystRatings, BasicFinancials, FinancialSnapshot, IncomeReport, Overview, PriceHistory,
    PricePoint, PriceQuote, PriceTargets,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
