//! Scan document merge engine.
//!
//! Folds scan documents into four collections keyed by resource
//! identity. The same resource reported by several scan files collapses
//! into one entry whose provenance set accumulates every contributing
//! file label; all other fields keep the first-seen values.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::logging::{LogContext, RunContext};
use crate::model::{DriftCategory, ResourceKey, ResourceRecord, ScanDocument};

/// Combined view over every scan document of one run.
///
/// Each map holds at most one entry per `(id, type)` identity. Built by
/// [`merge_documents`] and read-only afterwards; the summary calculator
/// and the report only ever inspect it.
#[derive(Debug, Default)]
pub struct AggregateResult {
    pub managed: BTreeMap<ResourceKey, ResourceRecord>,
    pub unmanaged: BTreeMap<ResourceKey, ResourceRecord>,
    pub missing: BTreeMap<ResourceKey, ResourceRecord>,
    pub changed: BTreeMap<ResourceKey, ResourceRecord>,
}

impl AggregateResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record into the given category, deduplicating by
    /// identity.
    ///
    /// On an identity hit only the provenance label of the incoming
    /// record is merged into the existing entry; region, account id and
    /// change log of the first-seen record win. Re-merging a label
    /// already present is a no-op, so the fold stays idempotent under
    /// re-ordering.
    pub fn add_resource(&mut self, category: DriftCategory, record: ResourceRecord) {
        let map = self.category_mut(category);
        let key = record.key();

        match map.get_mut(&key) {
            Some(existing) => {
                for label in &record.sources {
                    existing.add_source(label);
                }
            }
            None => {
                map.insert(key, record);
            }
        }
    }

    fn category_mut(&mut self, category: DriftCategory) -> &mut BTreeMap<ResourceKey, ResourceRecord> {
        match category {
            DriftCategory::Managed => &mut self.managed,
            DriftCategory::Unmanaged => &mut self.unmanaged,
            DriftCategory::Missing => &mut self.missing,
            DriftCategory::Changed => &mut self.changed,
        }
    }
}

/// Merge scan documents into a combined result.
///
/// Main entry point of the merge engine. Documents are folded strictly
/// in order; within a document the `managed`, `unmanaged` and `missing`
/// arrays are taken as-is, while each `differences` entry wraps its
/// resource payload under `res` and carries the diff under `changelog`,
/// which is attached to the record before insertion.
///
/// Absent category keys are skipped and malformed entries degrade to an
/// empty identity; a single document never aborts the run.
pub fn merge_documents(ctx: &RunContext, documents: &[ScanDocument]) -> AggregateResult {
    let mut result = AggregateResult::new();

    for document in documents {
        let log_ctx = ctx.file_context(&document.source_label);
        merge_document(&mut result, document, ctx.wrap_text, &log_ctx);
    }

    log::info!(
        "{} MERGE_COMPLETE documents={} managed={} unmanaged={} missing={} changed={}",
        ctx.log_context(),
        documents.len(),
        result.managed.len(),
        result.unmanaged.len(),
        result.missing.len(),
        result.changed.len()
    );

    result
}

fn merge_document(
    result: &mut AggregateResult,
    document: &ScanDocument,
    wrap_text: bool,
    log_ctx: &LogContext,
) {
    let meta = document.meta();

    for (category, key) in [
        (DriftCategory::Managed, "managed"),
        (DriftCategory::Unmanaged, "unmanaged"),
        (DriftCategory::Missing, "missing"),
    ] {
        for payload in category_entries(&document.body, key, log_ctx) {
            result.add_resource(category, ResourceRecord::from_payload(payload, &meta, wrap_text));
        }
    }

    for entry in category_entries(&document.body, "differences", log_ctx) {
        // A difference wraps the resource payload under "res"; the diff
        // itself lives next to it under "changelog".
        let payload = entry.get("res").unwrap_or(entry);
        let mut record = ResourceRecord::from_payload(payload, &meta, wrap_text);
        record.change_log = entry.get("changelog").cloned();
        result.add_resource(DriftCategory::Changed, record);
    }

    log::debug!("{} DOCUMENT_MERGED region={:?}", log_ctx, document.region);
}

/// Entries listed under one category key of a scan document.
///
/// An absent key or a non-array value yields no entries.
fn category_entries<'a>(body: &'a Value, key: &str, log_ctx: &LogContext) -> &'a [Value] {
    match body.get(key) {
        None => &[],
        Some(value) => match value.as_array() {
            Some(entries) => entries.as_slice(),
            None => {
                log::warn!("{} CATEGORY_NOT_A_LIST category={}", log_ctx, key);
                &[]
            }
        },
    }
}
