//! Scan file ingestion.
//!
//! Locates driftctl scan result files, recovers region/account metadata
//! for each file's directory via `terraform output`, and loads the
//! documents the merge engine consumes. Per-file failures are reported
//! and skipped; one unreadable file never aborts the batch.

pub mod discover;
pub mod loader;

pub use discover::find_scan_files;
pub use loader::load_scan_documents;

use thiserror::Error;

/// Failure to ingest a single scan file or search a scan directory.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid scan search pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("cannot read scan file {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("scan file {path:?} is not valid JSON: {source}")]
    Json {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },
}
