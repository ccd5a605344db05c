//! Report contract and renderer dispatch.
//!
//! Two render formats, grid table and CSV, share one row contract:
//! a fixed ordered summary (label, value) list, plus a detail table of
//! every missing, unmanaged and changed resource, in that category
//! order, emitted only when requested and coverage is below 100%.

pub mod csv;
pub mod table;
pub mod writer;

pub use writer::{write_report, OutputTarget};

use clap::ValueEnum;

use crate::aggregate::{AggregateResult, CoverageSummary};
use crate::model::DriftCategory;

pub const SUMMARY_HEADERS: [&str; 2] = ["Summary", "count"];
pub const DETAIL_HEADERS: [&str; 6] = [
    "Category",
    "Resource Id",
    "Resource Type",
    "Region",
    "Account Id",
    "Source",
];

/// Output format for the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Csv,
}

/// One row of the detail table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub category: &'static str,
    pub id: String,
    pub resource_type: String,
    pub region: String,
    pub account_id: String,
    pub source: String,
}

/// Everything a render backend consumes: the ordered summary rows and,
/// when detail was requested and coverage is incomplete, the detail
/// rows.
#[derive(Debug)]
pub struct Report {
    pub summary: Vec<(String, String)>,
    pub details: Option<Vec<DetailRow>>,
}

impl Report {
    /// Assemble the report rows for one aggregation run.
    ///
    /// The detail table is suppressed at 100% coverage even when
    /// changed resources exist; full coverage with drift is still full
    /// coverage.
    pub fn build(result: &AggregateResult, summary: &CoverageSummary, detailed: bool) -> Self {
        let details = if detailed && summary.coverage < 100 {
            Some(detail_rows(result))
        } else {
            None
        };

        Self {
            summary: summary_rows(summary),
            details,
        }
    }
}

/// The fixed summary rows, in report order.
pub fn summary_rows(summary: &CoverageSummary) -> Vec<(String, String)> {
    vec![
        ("Coverage".to_string(), format!("{}%", summary.coverage)),
        (
            "Found resource(s)".to_string(),
            summary.total_resources.to_string(),
        ),
        (
            "Resource(s) managed by Terraform".to_string(),
            summary.total_managed.to_string(),
        ),
        (
            "Resource(s) found in a Terraform state but missing on the cloud provider".to_string(),
            summary.total_missing.to_string(),
        ),
        (
            "Resource(s) not managed by Terraform".to_string(),
            summary.total_unmanaged.to_string(),
        ),
        (
            "Resource(s) out of sync with Terraform state".to_string(),
            summary.total_changed.to_string(),
        ),
    ]
}

/// Detail rows: all missing, then all unmanaged, then all changed.
pub fn detail_rows(result: &AggregateResult) -> Vec<DetailRow> {
    let mut rows = Vec::new();

    for (category, map) in [
        (DriftCategory::Missing, &result.missing),
        (DriftCategory::Unmanaged, &result.unmanaged),
        (DriftCategory::Changed, &result.changed),
    ] {
        for record in map.values() {
            rows.push(DetailRow {
                category: category.as_str(),
                id: record.id.clone(),
                resource_type: record.resource_type.clone(),
                region: record.region.clone(),
                account_id: record.account_id.clone(),
                source: record.source_display(),
            });
        }
    }

    rows
}

/// Render backend for one output format.
pub trait Renderer {
    fn name(&self) -> &'static str;
    fn render(&self, report: &Report) -> String;
}

/// Create the render backend for a format.
pub fn create_renderer(format: ReportFormat) -> Box<dyn Renderer> {
    match format {
        ReportFormat::Table => Box::new(table::TableRenderer),
        ReportFormat::Csv => Box::new(csv::CsvRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::RunContext;
    use crate::model::ScanDocument;
    use serde_json::json;

    fn aggregate(body: serde_json::Value) -> (AggregateResult, CoverageSummary) {
        let ctx = RunContext::new(false);
        let doc = ScanDocument::new("./f.json", "us-east-1", "111122223333", body);
        let result = crate::aggregate::merge_documents(&ctx, &[doc]);
        let summary = CoverageSummary::from_aggregate(&result);
        (result, summary)
    }

    #[test]
    fn test_summary_rows_order_and_labels() {
        let rows = summary_rows(&CoverageSummary::from_counts(2, 0, 71, 0));
        assert_eq!(rows[0], ("Coverage".to_string(), "2%".to_string()));
        assert_eq!(rows[1].1, "73");
        assert_eq!(rows[2].1, "2");
        assert_eq!(rows[3].1, "0");
        assert_eq!(rows[4].1, "71");
        assert_eq!(rows[5].1, "0");
    }

    #[test]
    fn test_detail_rows_category_order() {
        let (result, _) = aggregate(json!({
            "managed": [{"id": "m", "type": "t"}],
            "unmanaged": [{"id": "u", "type": "t"}],
            "missing": [{"id": "x", "type": "t"}],
            "differences": [{"res": {"id": "d", "type": "t"}, "changelog": []}]
        }));

        let rows = detail_rows(&result);
        let categories: Vec<&str> = rows.iter().map(|r| r.category).collect();
        assert_eq!(categories, vec!["Missing", "Unmanaged", "Changed"]);
        // Managed resources never appear in the detail view.
        assert!(!rows.iter().any(|r| r.id == "m"));
    }

    #[test]
    fn test_detail_suppressed_at_full_coverage() {
        let (result, summary) = aggregate(json!({
            "managed": [
                {"id": "a", "type": "t"},
                {"id": "b", "type": "t"},
                {"id": "c", "type": "t"}
            ],
            "differences": [{"res": {"id": "a", "type": "t"}, "changelog": []}]
        }));

        assert_eq!(summary.coverage, 100);
        let report = Report::build(&result, &summary, true);
        assert!(report.details.is_none());
    }

    #[test]
    fn test_detail_present_below_full_coverage() {
        let (result, summary) = aggregate(json!({
            "managed": [{"id": "a", "type": "t"}],
            "unmanaged": [{"id": "u", "type": "t"}]
        }));

        assert_eq!(summary.coverage, 50);
        let report = Report::build(&result, &summary, true);
        assert_eq!(report.details.as_ref().unwrap().len(), 1);

        let report = Report::build(&result, &summary, false);
        assert!(report.details.is_none());
    }
}
