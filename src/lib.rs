//! driftsum - Combine driftctl scan results into one coverage report
//!
//! driftctl is run once per terraform module, so a multi-module
//! infrastructure produces many independent scan result files. This
//! crate merges those documents into a single deduplicated view of
//! resource coverage and renders it as a grid table or CSV.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `ingest` - scan file discovery, metadata recovery, tolerant loading
//! - `model` - resource identity, records, scan document wrapper
//! - `aggregate` - merge/dedup engine and coverage summary
//! - `report` - row contract and the table/CSV render backends
//! - `logging` - run-scoped structured log context
//!
//! The flow is a one-shot fold: documents are loaded fully into memory,
//! merged strictly in order into four identity-keyed collections, the
//! coverage summary is derived from the collection sizes, and the
//! report backends consume the resulting rows.

pub mod aggregate;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod report;

/// Initialize the process-wide logger.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
