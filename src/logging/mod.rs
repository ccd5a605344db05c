//! Structured logging with run context.
//!
//! Provides a log context that includes the run id and, when a single
//! scan file is being processed, the file label, so messages from one
//! aggregation run are easy to correlate.

pub mod context;

pub use context::{LogContext, RunContext};
