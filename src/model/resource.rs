//! Minimal normalized representation of a scanned resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wrap::reflow;
use super::ResourceKey;

/// Column width used when a record is built in wrap-text mode.
const WRAP_WIDTH: usize = 70;

/// Environment metadata a scan document carries for every resource it
/// reports. Attached by the loader, not taken from the resource payload.
#[derive(Debug, Clone, Default)]
pub struct SourceMeta {
    pub source_label: String,
    pub region: String,
    pub account_id: String,
}

/// One scanned resource, normalized from a driftctl scan payload,
/// plus the provenance accumulated across scan files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: String,
    pub resource_type: String,

    /// Provenance labels, one per contributing scan file, in first-seen
    /// order and duplicate-free. Rendered as a ", "-joined string.
    pub sources: Vec<String>,

    /// Attribute diff payload, present only for changed resources.
    /// Passed through opaquely from the scan document.
    pub change_log: Option<Value>,

    // Environment metadata from the first scan file that reported this
    // resource; later duplicates do not overwrite these.
    pub region: String,
    pub account_id: String,
}

impl ResourceRecord {
    /// Build a record from a raw resource payload.
    ///
    /// The payload is expected to carry `id` and `type`; entries missing
    /// either degrade to an empty string rather than failing, so one
    /// malformed resource never aborts the batch. With `wrap_text` set,
    /// `id` and `type` are reflowed for display before being stored
    /// (callers must wrap consistently within one run, since identity is
    /// computed on the stored values).
    pub fn from_payload(payload: &Value, meta: &SourceMeta, wrap_text: bool) -> Self {
        let id = str_field(payload, "id");
        let resource_type = str_field(payload, "type");

        let (id, resource_type) = if wrap_text {
            (reflow(&id, WRAP_WIDTH), reflow(&resource_type, WRAP_WIDTH))
        } else {
            (id, resource_type)
        };

        Self {
            id,
            resource_type,
            sources: vec![meta.source_label.clone()],
            change_log: payload.get("change_log").cloned(),
            region: meta.region.clone(),
            account_id: meta.account_id.clone(),
        }
    }

    /// Identity key for this record. Provenance and environment metadata
    /// are excluded.
    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(&self.id, &self.resource_type)
    }

    /// Record a provenance label. Exact set membership: re-adding a label
    /// already present is a no-op, and labels that are substrings of one
    /// another ("fileA" vs "fileA-2") stay distinct.
    pub fn add_source(&mut self, label: &str) {
        if !self.sources.iter().any(|s| s == label) {
            self.sources.push(label.to_string());
        }
    }

    /// Rendering-time projection of the provenance set.
    pub fn source_display(&self) -> String {
        self.sources.join(", ")
    }
}

fn str_field(payload: &Value, field: &str) -> String {
    payload
        .get(field)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}
