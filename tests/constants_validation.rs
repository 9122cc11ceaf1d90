//! Validates that compile-time constants are internally consistent.
#![allow(clippy::assertions_on_constants)]

use robotscope::util::constants::*;

#[test]
fn batch_size_is_positive() {
    assert!(RESULT_BATCH_SIZE > 0, "RESULT_BATCH_SIZE must be > 0");
}

#[test]
fn channel_bound_is_positive() {
    assert!(CHANNEL_BOUND > 0, "CHANNEL_BOUND must be > 0");
}

#[test]
fn submission_limits_are_ordered() {
    assert!(
        LARGE_BATCH_THRESHOLD < MAX_URLS_PER_SUBMISSION,
        "the large-batch notice must fire before the hard cap"
    );
    assert!(MAX_URLS_PER_SUBMISSION <= 10_000, "Cap unreasonably large");
}

#[test]
fn feedback_timing_is_sane() {
    assert!(FEEDBACK_FLOOR_MS >= 1_000, "Floor should be at least 1s");
    assert!(FEEDBACK_PER_DOMAIN_MS > 0, "Per-domain allowance must be > 0");
    // The floor must dominate for a single domain, otherwise tiny batches
    // would get flagged almost immediately.
    assert!(FEEDBACK_FLOOR_MS > FEEDBACK_PER_DOMAIN_MS);
}

#[test]
fn max_errors_is_bounded() {
    assert!(MAX_ERRORS > 0, "MAX_ERRORS must be > 0");
    assert!(MAX_ERRORS <= 10_000, "MAX_ERRORS should be bounded");
}

#[test]
fn app_metadata_is_populated() {
    assert!(!APP_NAME.is_empty(), "APP_NAME must not be empty");
    assert!(!APP_VERSION.is_empty(), "APP_VERSION must not be empty");
    assert!(!LOG_FILE_NAME.is_empty(), "LOG_FILE_NAME must not be empty");
}

#[test]
fn table_row_height_is_positive() {
    assert!(TABLE_ROW_HEIGHT > 0.0);
}
