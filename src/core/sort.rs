//! Table sorting: column keys, toggled direction, and the stable sort pass.
//!
//! Sort state is an explicit value ([`SortState`]) owned by the app, not
//! inferred from widget attributes. At most one column is sorted at a time;
//! clicking a new header resets the previous one. The master record `Vec`
//! itself is reordered — its order is the single source of truth for what
//! the table displays.

use crate::core::record::AnalysisRecord;

/// Which column drives the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Url,
    Status,
    Check,
}

impl SortKey {
    /// Parse a sort key from its string identifier.
    ///
    /// Returns `None` for unrecognized keys; callers treat that as
    /// "don't reorder" rather than an error.
    pub fn parse(s: &str) -> Option<SortKey> {
        match s {
            "url" => Some(SortKey::Url),
            "status" => Some(SortKey::Status),
            "check" => Some(SortKey::Check),
            _ => None,
        }
    }

    /// String identifier for this key (inverse of [`SortKey::parse`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Url => "url",
            SortKey::Status => "status",
            SortKey::Check => "check",
        }
    }

    /// Extract the comparison value for a record: the column's cell text,
    /// lower-cased so ordering is case-insensitive.
    fn cell_value(&self, record: &AnalysisRecord) -> String {
        match self {
            SortKey::Url => record.url.trim().to_lowercase(),
            SortKey::Status => record.status_label().to_string(),
            SortKey::Check => record.check_label().to_lowercase(),
        }
    }
}

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort: one column key plus a direction.
///
/// `Option<SortState>` on the app is the full sorter state; `None` means
/// the table is in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// Compute the sort state after a click on `key`'s header.
    ///
    /// Clicking the already-active column toggles its direction; clicking a
    /// different column selects it ascending and implicitly resets the old
    /// one (there is only ever one `SortState`).
    pub fn click(current: Option<SortState>, key: SortKey) -> SortState {
        match current {
            Some(state) if state.key == key => SortState {
                key,
                direction: state.direction.toggled(),
            },
            _ => SortState {
                key,
                direction: SortDirection::Ascending,
            },
        }
    }
}

/// Stable-sort `records` in place according to `state`.
///
/// `None` is a deliberate no-op: with no recognized key there is nothing to
/// compare, and the existing order stands. Ties keep their prior relative
/// order in both directions, so equal-key rows never shuffle.
pub fn sort_records(records: &mut [AnalysisRecord], state: Option<SortState>) {
    let Some(state) = state else {
        return;
    };

    records.sort_by(|a, b| {
        let ord = state.key.cell_value(a).cmp(&state.key.cell_value(b));
        match state.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::AnalysisStatus;

    fn record(url: &str, marker: &str) -> AnalysisRecord {
        AnalysisRecord {
            url: url.into(),
            // robots_url doubles as an identity marker for stability checks
            robots_url: marker.into(),
            status: AnalysisStatus::Success,
            google_disallowed: false,
            disallow_rules: vec![],
            robots_content: String::new(),
            error_message: String::new(),
        }
    }

    fn urls(records: &[AnalysisRecord]) -> Vec<&str> {
        records.iter().map(|r| r.url.as_str()).collect()
    }

    #[test]
    fn first_click_sorts_ascending() {
        let state = SortState::click(None, SortKey::Url);
        assert_eq!(state.direction, SortDirection::Ascending);

        let mut records = vec![record("b.com", ""), record("a.com", ""), record("c.com", "")];
        sort_records(&mut records, Some(state));
        assert_eq!(urls(&records), vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn second_click_toggles_to_descending() {
        let first = SortState::click(None, SortKey::Url);
        let second = SortState::click(Some(first), SortKey::Url);
        assert_eq!(second.direction, SortDirection::Descending);

        let mut records = vec![record("b.com", ""), record("a.com", ""), record("c.com", "")];
        sort_records(&mut records, Some(second));
        assert_eq!(urls(&records), vec!["c.com", "b.com", "a.com"]);

        let third = SortState::click(Some(second), SortKey::Url);
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn switching_column_resets_to_ascending() {
        let state = SortState::click(
            Some(SortState {
                key: SortKey::Url,
                direction: SortDirection::Descending,
            }),
            SortKey::Status,
        );
        assert_eq!(state.key, SortKey::Status);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn sort_is_case_insensitive() {
        let mut records = vec![record("B.com", ""), record("a.com", ""), record("C.com", "")];
        sort_records(
            &mut records,
            Some(SortState {
                key: SortKey::Url,
                direction: SortDirection::Ascending,
            }),
        );
        assert_eq!(urls(&records), vec!["a.com", "B.com", "C.com"]);
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        // All four records compare equal on Status; relative order must hold
        // in both directions.
        let mut records = vec![
            record("z.com", "1"),
            record("m.com", "2"),
            record("a.com", "3"),
            record("q.com", "4"),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            sort_records(
                &mut records,
                Some(SortState {
                    key: SortKey::Status,
                    direction,
                }),
            );
            let markers: Vec<&str> = records.iter().map(|r| r.robots_url.as_str()).collect();
            assert_eq!(markers, vec!["1", "2", "3", "4"]);
        }
    }

    #[test]
    fn sorting_sorted_rows_is_idempotent() {
        let state = Some(SortState {
            key: SortKey::Url,
            direction: SortDirection::Ascending,
        });
        let mut records = vec![record("b.com", ""), record("a.com", ""), record("c.com", "")];
        sort_records(&mut records, state);
        let once = urls(&records).into_iter().map(String::from).collect::<Vec<_>>();
        sort_records(&mut records, state);
        assert_eq!(urls(&records), once);
    }

    #[test]
    fn unknown_key_parses_to_none_and_no_reorder() {
        assert_eq!(SortKey::parse("google"), None);
        assert_eq!(SortKey::parse(""), None);
        assert_eq!(SortKey::parse("url"), Some(SortKey::Url));

        let mut records = vec![record("b.com", ""), record("a.com", "")];
        sort_records(&mut records, SortKey::parse("bogus").map(|key| SortState {
            key,
            direction: SortDirection::Ascending,
        }));
        assert_eq!(urls(&records), vec!["b.com", "a.com"]);
    }
}
