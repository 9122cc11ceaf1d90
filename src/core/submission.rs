//! Submission feedback: domain counting, the busy-state deadline, and
//! the banner strip shown under the submit form.
//!
//! The deadline is a purely client-side heuristic: it guesses that an
//! analysis run has stalled once `max(60s, 3s per domain)` has elapsed
//! without completion. Worker completion cancels it explicitly; if it fires
//! after a slow-but-successful run, the resulting banner is cosmetic only.

use std::time::{Duration, Instant};

use crate::util::constants::{
    FEEDBACK_FLOOR_MS, FEEDBACK_PER_DOMAIN_MS, LARGE_BATCH_THRESHOLD, MAX_URLS_PER_SUBMISSION,
};

/// Split the multi-line URL input into trimmed, non-blank lines.
pub fn domain_list(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Number of non-blank lines in the URL input.
pub fn domain_count(input: &str) -> usize {
    input.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Validate and bound a submission.
///
/// Returns the URL list to dispatch plus the banners the strip should
/// show for it. An empty URL list means nothing may be dispatched (the
/// accompanying warning banner says why). Oversized input is truncated to
/// [`MAX_URLS_PER_SUBMISSION`] with a warning, and anything past
/// [`LARGE_BATCH_THRESHOLD`] gets one informational notice.
pub fn prepare_batch(input: &str) -> (Vec<String>, Vec<Banner>) {
    let mut banners = Vec::new();
    let mut urls = domain_list(input);

    if urls.is_empty() {
        banners.push(Banner::warning("Please enter at least one URL."));
        return (urls, banners);
    }

    if urls.len() > MAX_URLS_PER_SUBMISSION {
        banners.push(Banner::warning(format!(
            "For performance reasons, only the first {} URLs will be analyzed. You entered {}.",
            MAX_URLS_PER_SUBMISSION,
            urls.len()
        )));
        urls.truncate(MAX_URLS_PER_SUBMISSION);
    }

    if urls.len() > LARGE_BATCH_THRESHOLD {
        banners.push(Banner::info(format!(
            "Processing {} domains... This may take a minute or two. Please be patient.",
            urls.len()
        )));
    }

    (urls, banners)
}

/// How long to wait before assuming an analysis run has stalled.
///
/// `max(60s, count x 3s)` — the floor guarantees small batches are never
/// flagged early, and large batches get a proportional allowance.
pub fn feedback_timeout(count: usize) -> Duration {
    let scaled = count as u64 * FEEDBACK_PER_DOMAIN_MS;
    Duration::from_millis(scaled.max(FEEDBACK_FLOOR_MS))
}

/// Busy state for an in-flight submission.
///
/// Exists from the moment the user submits until either the worker reports
/// completion (explicit cancel) or the deadline fires (heuristic timeout).
/// While present, the Analyze control is disabled — that alone prevents
/// duplicate submissions.
#[derive(Debug, Clone, Copy)]
pub struct PendingSubmission {
    /// How many domains were dispatched.
    pub domain_count: usize,
    /// When the submission started.
    pub started: Instant,
    /// When the "still processing?" warning fires.
    pub deadline: Instant,
}

impl PendingSubmission {
    /// Start tracking a submission of `domain_count` domains.
    pub fn new(domain_count: usize) -> Self {
        let started = Instant::now();
        Self {
            domain_count,
            started,
            deadline: started + feedback_timeout(domain_count),
        }
    }

    /// Whether the deadline has passed as of `now`.
    pub fn expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left until the deadline (zero if already expired).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// Severity of a banner shown under the submit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Warning,
}

/// A dismissible informational strip appended near the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Warning,
            text: text.into(),
        }
    }
}
