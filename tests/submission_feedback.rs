//! Integration tests for submission parsing and the busy-state deadline.

use std::time::Duration;

use robotscope::core::submission::{domain_list, feedback_timeout, PendingSubmission};
use robotscope::util::constants::{LARGE_BATCH_THRESHOLD, MAX_URLS_PER_SUBMISSION};

#[test]
fn pasted_textarea_content_parses_to_clean_list() {
    let input = "\nexample.com\r\n   spaced.example.org   \n\n\t\nlast.example\n";
    let list = domain_list(input);
    assert_eq!(list, vec!["example.com", "spaced.example.org", "last.example"]);
}

#[test]
fn small_batches_share_the_minute_floor() {
    for count in [1, 5, 20] {
        assert_eq!(
            feedback_timeout(count),
            Duration::from_secs(60),
            "{count} domains should use the floor"
        );
    }
}

#[test]
fn timeout_crossover_at_twenty_domains() {
    // 20 x 3s == 60s exactly; 21 tips over the floor
    assert_eq!(feedback_timeout(20), Duration::from_secs(60));
    assert_eq!(feedback_timeout(21), Duration::from_secs(63));
}

#[test]
fn capped_batch_has_a_bounded_deadline() {
    let timeout = feedback_timeout(MAX_URLS_PER_SUBMISSION);
    assert_eq!(timeout, Duration::from_secs(600));
}

#[test]
fn deadline_tracks_domain_count() {
    let small = PendingSubmission::new(5);
    let large = PendingSubmission::new(100);
    assert!(large.deadline.duration_since(large.started) > small.deadline.duration_since(small.started));
}

#[test]
fn remaining_counts_down_and_saturates() {
    let pending = PendingSubmission::new(1);
    let halfway = pending.started + Duration::from_secs(30);
    assert_eq!(pending.remaining(halfway), Duration::from_secs(30));
    let past = pending.deadline + Duration::from_secs(5);
    assert_eq!(pending.remaining(past), Duration::ZERO);
    assert!(pending.expired(past));
}

#[test]
fn large_batch_threshold_is_below_the_cap() {
    // The "be patient" notice has to be reachable for capped submissions.
    assert!(LARGE_BATCH_THRESHOLD < MAX_URLS_PER_SUBMISSION);
}
