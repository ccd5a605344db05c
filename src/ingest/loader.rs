//! Scan document loading and metadata recovery.
//!
//! Each scan file's directory is expected to hold an initialized
//! terraform configuration exposing `resource_region` and
//! `resource_account_id` outputs; both degrade to empty strings when
//! terraform cannot be queried.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;

use crate::logging::{LogContext, RunContext};
use crate::model::ScanDocument;

use super::IngestError;

/// Load every readable scan file into an annotated document.
///
/// Files that cannot be read or parsed are logged and skipped so the
/// rest of the batch still aggregates.
pub fn load_scan_documents(ctx: &RunContext, files: &[PathBuf]) -> Vec<ScanDocument> {
    let mut documents = Vec::new();

    for file in files {
        let label = source_label(file);
        let log_ctx = ctx.file_context(&label);

        match load_scan_document(file, &label, &log_ctx) {
            Ok(document) => documents.push(document),
            Err(e) => {
                log::warn!("{} FILE_SKIPPED error={}", log_ctx, e);
            }
        }
    }

    log::info!(
        "{} DOCUMENTS_LOADED requested={} loaded={}",
        ctx.log_context(),
        files.len(),
        documents.len()
    );

    documents
}

fn load_scan_document(
    path: &Path,
    label: &str,
    log_ctx: &LogContext,
) -> Result<ScanDocument, IngestError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let (region, account_id) = account_details(dir, log_ctx);

    let raw = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let body: Value = serde_json::from_str(&raw).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("{} FILE_LOADED region={:?} account_id={:?}", log_ctx, region, account_id);

    Ok(ScanDocument::new(label, &region, &account_id, body))
}

/// Provenance label for a scan file: its path relative to the working
/// directory (as `./...`) when it lives under it, the full path
/// otherwise.
pub fn source_label(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(rel) = path.strip_prefix(&cwd) {
            return format!("./{}", rel.display());
        }
    }
    path.display().to_string()
}

/// Region and account id for a scan directory, recovered from the
/// terraform outputs `resource_region` and `resource_account_id`.
/// Either missing value degrades to an empty string.
pub fn account_details(dir: &Path, ctx: &LogContext) -> (String, String) {
    let output = terraform_output(dir, ctx);
    let region = output_value(&output, "resource_region");
    let account_id = output_value(&output, "resource_account_id");
    (region, account_id)
}

/// Run `terraform output -json` in `dir` and parse the result.
///
/// Any failure (terraform absent, uninitialized configuration, bad
/// JSON) is logged and yields an empty object.
fn terraform_output(dir: &Path, ctx: &LogContext) -> Value {
    let result = Command::new("terraform")
        .arg(format!("-chdir={}", dir.display()))
        .args(["output", "-json"])
        .output();

    let output = match result {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            log::warn!(
                "{} TERRAFORM_OUTPUT_FAILED dir={:?} status={}",
                ctx,
                dir,
                output.status
            );
            return Value::Object(Default::default());
        }
        Err(e) => {
            log::warn!("{} TERRAFORM_OUTPUT_FAILED dir={:?} error={}", ctx, dir, e);
            return Value::Object(Default::default());
        }
    };

    match serde_json::from_slice(&output.stdout) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{} TERRAFORM_OUTPUT_NOT_JSON dir={:?} error={}", ctx, dir, e);
            Value::Object(Default::default())
        }
    }
}

/// A terraform output value: `{"<name>": {"value": ...}}`.
fn output_value(output: &Value, name: &str) -> String {
    match output.get(name).and_then(|o| o.get("value")) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_output_value_extraction() {
        let output = json!({
            "resource_region": {"value": "eu-central-1"},
            "resource_account_id": {"value": 123456789012u64}
        });
        assert_eq!(output_value(&output, "resource_region"), "eu-central-1");
        // Non-string outputs are stringified rather than dropped.
        assert_eq!(output_value(&output, "resource_account_id"), "123456789012");
        assert_eq!(output_value(&output, "absent"), "");
    }

    #[test]
    fn test_load_skips_unparsable_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        fs::write(&good, r#"{"managed": []}"#).unwrap();
        fs::write(&bad, "not json{").unwrap();

        let ctx = RunContext::new(false);
        let documents = load_scan_documents(&ctx, &[bad, good.clone()]);
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].body, json!({"managed": []}));
    }

    #[test]
    fn test_load_skips_absent_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let ctx = RunContext::new(false);
        let documents = load_scan_documents(&ctx, &[missing]);
        assert!(documents.is_empty());
    }

    #[test]
    fn test_source_label_outside_cwd_is_full_path() {
        let label = source_label(Path::new("/somewhere/else/result.json"));
        assert_eq!(label, "/somewhere/else/result.json");
    }
}
