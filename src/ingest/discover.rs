//! Recursive scan file discovery.

use std::path::{Path, PathBuf};

use crate::logging::LogContext;

use super::IngestError;

/// Find every file named `file_name` under `root_dir`, recursively.
///
/// Unreadable directory entries are logged and skipped; only a pattern
/// that cannot be compiled (pathological `root_dir` contents) is an
/// error.
pub fn find_scan_files(
    root_dir: &Path,
    file_name: &str,
    ctx: &LogContext,
) -> Result<Vec<PathBuf>, IngestError> {
    let pattern = root_dir
        .join("**")
        .join(file_name)
        .to_string_lossy()
        .into_owned();

    let paths = glob::glob(&pattern).map_err(|source| IngestError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => {
                log::warn!("{} SCAN_ENTRY_UNREADABLE error={}", ctx, e);
            }
        }
    }

    log::info!(
        "{} SCAN_FILES_FOUND pattern={:?} count={}",
        ctx,
        pattern,
        files.len()
    );

    Ok(files)
}
