//! Run context management.
//!
//! Provides run and per-file context for logging and state tracking.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Context for one aggregation run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub wrap_text: bool,
}

impl RunContext {
    pub fn new(wrap_text: bool) -> Self {
        let run_id = format!("run-{}", &Uuid::new_v4().to_string()[..8]);

        Self {
            run_id,
            started_at: Utc::now(),
            wrap_text,
        }
    }

    /// Log context covering the whole run.
    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.run_id)
    }

    /// Log context scoped to a single scan file.
    pub fn file_context(&self, file: &str) -> LogContext {
        LogContext::new(&self.run_id).with_file(file)
    }
}

/// Logging context for an aggregation run.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub run_id: String,
    pub file: Option<String>,
}

impl LogContext {
    pub fn new(run_id: &str) -> Self {
        Self {
            run_id: run_id.to_string(),
            file: None,
        }
    }

    pub fn with_file(&self, file: &str) -> Self {
        Self {
            run_id: self.run_id.clone(),
            file: Some(file.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "[run={}] [file={}]", self.run_id, file),
            None => write!(f, "[run={}]", self.run_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new("run-123");
        assert_eq!(format!("{}", ctx), "[run=run-123]");

        let ctx_with_file = ctx.with_file("./mod-a/driftctl-result.json");
        assert_eq!(
            format!("{}", ctx_with_file),
            "[run=run-123] [file=./mod-a/driftctl-result.json]"
        );
    }
}
