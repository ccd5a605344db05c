//! Scan document wrapper.

use serde_json::Value;

/// One loaded driftctl scan result, annotated with the environment
/// metadata recovered for the directory it came from.
///
/// `body` is the scan output as parsed, untouched: the merge engine
/// navigates its `managed`, `unmanaged`, `missing` and `differences`
/// keys tolerantly, so nothing about the shape is required up front.
#[derive(Debug, Clone)]
pub struct ScanDocument {
    pub source_label: String,
    pub region: String,
    pub account_id: String,
    pub body: Value,
}

impl ScanDocument {
    pub fn new(source_label: &str, region: &str, account_id: &str, body: Value) -> Self {
        Self {
            source_label: source_label.to_string(),
            region: region.to_string(),
            account_id: account_id.to_string(),
            body,
        }
    }

    /// Environment metadata to stamp onto every record built from this
    /// document.
    pub fn meta(&self) -> crate::model::SourceMeta {
        crate::model::SourceMeta {
            source_label: self.source_label.clone(),
            region: self.region.clone(),
            account_id: self.account_id.clone(),
        }
    }
}
