//! Core data model for merged driftctl scan results.
//!
//! A scan reports each resource in one of four drift categories. The
//! aggregator keys resources by `(id, type)` identity, so the key type
//! and the minimal resource record live here, together with the scan
//! document wrapper the loader hands to the merge engine.

pub mod document;
pub mod resource;
pub mod wrap;

pub use document::ScanDocument;
pub use resource::{ResourceRecord, SourceMeta};

/// Drift category a scanned resource falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftCategory {
    Managed,
    Unmanaged,
    Missing,
    Changed,
}

impl DriftCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriftCategory::Managed => "Managed",
            DriftCategory::Unmanaged => "Unmanaged",
            DriftCategory::Missing => "Missing",
            DriftCategory::Changed => "Changed",
        }
    }
}

/// Composite identity key for a scanned resource.
///
/// Two records describe the same logical resource exactly when both
/// `id` and `resource_type` match. Provenance, region and account id
/// are deliberately excluded: the same resource reported by several
/// scan files (or regions) collapses into one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    pub id: String,
    pub resource_type: String,
}

impl ResourceKey {
    pub fn new(id: &str, resource_type: &str) -> Self {
        Self {
            id: id.to_string(),
            resource_type: resource_type.to_string(),
        }
    }
}
