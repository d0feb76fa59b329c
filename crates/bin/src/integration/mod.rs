//! Glue between the CLI and the library crates.

pub(crate) mod config;
pub(crate) mod logging;
pub(crate) mod report_dir;
pub(crate) mod snapshot_loader;
