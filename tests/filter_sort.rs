//! Integration tests for the category filter and column sorting working
//! together over one master record list.

use robotscope::core::filter::{visible_indices, CategoryFilter};
use robotscope::core::record::{AnalysisRecord, AnalysisStatus};
use robotscope::core::sort::{sort_records, SortDirection, SortKey, SortState};

fn record(url: &str, status: AnalysisStatus, disallowed: bool) -> AnalysisRecord {
    AnalysisRecord {
        url: url.into(),
        robots_url: format!("{url}/robots.txt"),
        status,
        google_disallowed: disallowed,
        disallow_rules: vec![],
        robots_content: String::new(),
        error_message: if status == AnalysisStatus::Error {
            "fetch failed".into()
        } else {
            String::new()
        },
    }
}

fn sample_set() -> Vec<AnalysisRecord> {
    vec![
        record("delta.com", AnalysisStatus::Success, true),
        record("alpha.com", AnalysisStatus::Success, false),
        record("echo.com", AnalysisStatus::Error, false),
        record("bravo.com", AnalysisStatus::Success, true),
        record("charlie.com", AnalysisStatus::Success, false),
    ]
}

#[test]
fn all_filter_shows_every_record_in_list_order() {
    let records = sample_set();
    let visible = visible_indices(&records, CategoryFilter::All);
    assert_eq!(visible, vec![0, 1, 2, 3, 4]);
}

#[test]
fn category_filters_partition_the_set() {
    let records = sample_set();
    let disallowed = visible_indices(&records, CategoryFilter::Disallowed);
    let allowed = visible_indices(&records, CategoryFilter::Allowed);
    let errors = visible_indices(&records, CategoryFilter::Errors);

    assert_eq!(disallowed, vec![0, 3]);
    assert_eq!(allowed, vec![1, 4]);
    assert_eq!(errors, vec![2]);

    // Every record lands in exactly one category
    let total = disallowed.len() + allowed.len() + errors.len();
    assert_eq!(total, records.len());
}

#[test]
fn sorting_reorders_filtered_view_too() {
    let mut records = sample_set();
    let state = SortState::click(None, SortKey::Url);
    assert_eq!(state.direction, SortDirection::Ascending);
    sort_records(&mut records, Some(state));

    // Master order is now alphabetical...
    let urls: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["alpha.com", "bravo.com", "charlie.com", "delta.com", "echo.com"]
    );

    // ...and the filtered view follows the new master order.
    let disallowed = visible_indices(&records, CategoryFilter::Disallowed);
    let visible_urls: Vec<&str> = disallowed.iter().map(|&i| records[i].url.as_str()).collect();
    assert_eq!(visible_urls, vec!["bravo.com", "delta.com"]);
}

#[test]
fn toggling_direction_reverses_comparison_not_positions() {
    let mut records = sample_set();
    let asc = SortState::click(None, SortKey::Url);
    sort_records(&mut records, Some(asc));

    let desc = SortState::click(Some(asc), SortKey::Url);
    assert_eq!(desc.direction, SortDirection::Descending);
    sort_records(&mut records, Some(desc));

    let urls: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["echo.com", "delta.com", "charlie.com", "bravo.com", "alpha.com"]
    );
}

#[test]
fn switching_sort_column_starts_ascending() {
    let prev = SortState::click(None, SortKey::Url);
    let toggled = SortState::click(Some(prev), SortKey::Url);
    assert_eq!(toggled.direction, SortDirection::Descending);

    // A different column resets to ascending regardless of prior direction
    let switched = SortState::click(Some(toggled), SortKey::Status);
    assert_eq!(switched.key, SortKey::Status);
    assert_eq!(switched.direction, SortDirection::Ascending);
}

#[test]
fn status_sort_groups_by_cell_text() {
    let mut records = sample_set();
    sort_records(&mut records, Some(SortState::click(None, SortKey::Status)));

    // "error" < "success" lexicographically
    assert_eq!(records[0].url, "echo.com");
    assert!(records[1..]
        .iter()
        .all(|r| r.status == AnalysisStatus::Success));
}

#[test]
fn check_sort_is_stable_within_equal_cells() {
    let mut records = sample_set();
    sort_records(&mut records, Some(SortState::click(None, SortKey::Check)));

    // "Allowed" < "Disallowed" < "Error"; within each group the original
    // relative order (delta before bravo, alpha before charlie) survives.
    let urls: Vec<&str> = records.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["alpha.com", "charlie.com", "delta.com", "bravo.com", "echo.com"]
    );
}

#[test]
fn unsorted_state_preserves_submission_order() {
    let mut records = sample_set();
    let original: Vec<String> = records.iter().map(|r| r.url.clone()).collect();
    sort_records(&mut records, None);
    let after: Vec<String> = records.iter().map(|r| r.url.clone()).collect();
    assert_eq!(original, after);
}
