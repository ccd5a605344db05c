//! Merge engine and coverage summary.
//!
//! Folds any number of scan documents into four deduplicated resource
//! collections and derives coverage statistics from them.

pub mod merge;
pub mod summary;

pub use merge::{merge_documents, AggregateResult};
pub use summary::CoverageSummary;
