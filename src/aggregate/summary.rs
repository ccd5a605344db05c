//! Coverage summary derived from an aggregate result.

use serde::{Deserialize, Serialize};

use super::AggregateResult;

/// Coverage statistics for one aggregation run.
///
/// `total_resources` counts managed, missing and unmanaged resources;
/// changed resources are excluded on purpose, since a drifted resource
/// is still a managed one. Coverage is the floored percentage of
/// discovered resources that are managed, 0 when nothing was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub total_managed: usize,
    pub total_missing: usize,
    pub total_unmanaged: usize,
    pub total_changed: usize,
    pub total_resources: usize,
    pub coverage: usize,
}

impl CoverageSummary {
    /// Derive the summary from the four collection sizes. Pure; the
    /// aggregate is not touched beyond its lengths.
    pub fn from_aggregate(result: &AggregateResult) -> Self {
        Self::from_counts(
            result.managed.len(),
            result.missing.len(),
            result.unmanaged.len(),
            result.changed.len(),
        )
    }

    pub fn from_counts(
        total_managed: usize,
        total_missing: usize,
        total_unmanaged: usize,
        total_changed: usize,
    ) -> Self {
        let total_resources = total_managed + total_missing + total_unmanaged;
        let coverage = if total_resources > 0 {
            total_managed * 100 / total_resources
        } else {
            0
        };

        Self {
            total_managed,
            total_missing,
            total_unmanaged,
            total_changed,
            total_resources,
            coverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_aggregate_has_zero_coverage() {
        let summary = CoverageSummary::from_aggregate(&AggregateResult::new());
        assert_eq!(summary.total_resources, 0);
        assert_eq!(summary.coverage, 0);
    }

    #[test]
    fn test_coverage_is_floored() {
        // floor(2 * 100 / 73) = 2
        let summary = CoverageSummary::from_counts(2, 0, 71, 0);
        assert_eq!(summary.total_resources, 73);
        assert_eq!(summary.coverage, 2);
    }

    #[test]
    fn test_zero_managed() {
        let summary = CoverageSummary::from_counts(0, 2, 71, 0);
        assert_eq!(summary.total_resources, 73);
        assert_eq!(summary.coverage, 0);
    }

    #[test]
    fn test_changed_excluded_from_totals() {
        let without = CoverageSummary::from_counts(3, 1, 2, 0);
        let with = CoverageSummary::from_counts(3, 1, 2, 40);
        assert_eq!(with.total_resources, without.total_resources);
        assert_eq!(with.coverage, without.coverage);
        assert_eq!(with.total_changed, 40);
    }

    #[test]
    fn test_full_coverage_with_drift() {
        let summary = CoverageSummary::from_counts(3, 0, 0, 1);
        assert_eq!(summary.total_resources, 3);
        assert_eq!(summary.coverage, 100);
    }
}
