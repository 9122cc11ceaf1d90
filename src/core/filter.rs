//! Category-based row filtering.
//!
//! [`CategoryFilter`] is the single piece of filter state: an enum, so
//! exactly one filter is active at any time by construction. Filtering is
//! performed in-memory against the loaded record list and produces the set
//! of visible row indices in master-list order.

use crate::core::record::{AnalysisRecord, Category};

/// Which category of results the table currently shows.
///
/// Defaults to [`CategoryFilter::All`]; the choice is not persisted across
/// runs, so every launch starts back at "show all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every record.
    #[default]
    All,
    /// Only records where a Google crawler is disallowed.
    Disallowed,
    /// Only records where Google crawlers are unrestricted.
    Allowed,
    /// Only records whose analysis failed.
    Errors,
}

impl CategoryFilter {
    /// All filter choices in the order the filter bar renders them.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Disallowed,
        CategoryFilter::Allowed,
        CategoryFilter::Errors,
    ];

    /// Button label for this filter.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Disallowed => "Disallowed",
            CategoryFilter::Allowed => "Allowed",
            CategoryFilter::Errors => "Errors",
        }
    }

    /// Test whether the given record is visible under this filter.
    pub fn matches(&self, record: &AnalysisRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Disallowed => record.category() == Category::Disallowed,
            CategoryFilter::Allowed => record.category() == Category::Allowed,
            CategoryFilter::Errors => record.category() == Category::Error,
        }
    }
}

/// Compute the indices of records visible under `filter`, in master-list
/// order. An empty result means the table renders header-only.
pub fn visible_indices(records: &[AnalysisRecord], filter: CategoryFilter) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| filter.matches(r))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::AnalysisStatus;

    fn record(url: &str, status: AnalysisStatus, disallowed: bool) -> AnalysisRecord {
        AnalysisRecord {
            url: url.into(),
            robots_url: String::new(),
            status,
            google_disallowed: disallowed,
            disallow_rules: vec![],
            robots_content: String::new(),
            error_message: String::new(),
        }
    }

    fn sample() -> Vec<AnalysisRecord> {
        vec![
            record("a.com", AnalysisStatus::Success, false),
            record("b.com", AnalysisStatus::Success, true),
            record("c.com", AnalysisStatus::Error, false),
            record("d.com", AnalysisStatus::Success, true),
        ]
    }

    #[test]
    fn all_shows_every_row() {
        let records = sample();
        assert_eq!(visible_indices(&records, CategoryFilter::All), vec![0, 1, 2, 3]);
    }

    #[test]
    fn category_shows_exactly_matching_rows() {
        let records = sample();
        assert_eq!(
            visible_indices(&records, CategoryFilter::Disallowed),
            vec![1, 3]
        );
        assert_eq!(visible_indices(&records, CategoryFilter::Allowed), vec![0]);
        assert_eq!(visible_indices(&records, CategoryFilter::Errors), vec![2]);
    }

    #[test]
    fn zero_matches_yields_empty_body() {
        let records = vec![record("a.com", AnalysisStatus::Success, false)];
        assert!(visible_indices(&records, CategoryFilter::Errors).is_empty());
    }

    #[test]
    fn default_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }
}
