//! Application-wide constants for RobotScope.
//!
//! Centralising magic numbers and configuration defaults here keeps the rest
//! of the codebase clean and makes tuning straightforward.

/// Application display name used in titles, dialogs, etc.
pub const APP_NAME: &str = "RobotScope";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Batch size above which a submission gets an informational
/// "this may take a while" banner.
pub const LARGE_BATCH_THRESHOLD: usize = 50;

/// Maximum number of URLs accepted per submission. Anything beyond this
/// is truncated with a warning banner.
pub const MAX_URLS_PER_SUBMISSION: usize = 200;

/// Floor for the submission feedback deadline, in milliseconds.
/// Even tiny batches get a full minute before the "still processing?"
/// warning appears.
pub const FEEDBACK_FLOOR_MS: u64 = 60_000;

/// Per-domain allowance added to the feedback deadline, in milliseconds.
/// Assumes roughly 1-3 seconds of analysis time per URL.
pub const FEEDBACK_PER_DOMAIN_MS: u64 = 3_000;

/// Size of the channel used to send results from the worker thread to the UI.
/// Bounded to apply back-pressure if the UI falls behind.
pub const CHANNEL_BOUND: usize = 256;

/// How many analysis results to accumulate before sending a batch to the UI.
/// Smaller batches = more responsive updates; larger = less overhead.
pub const RESULT_BATCH_SIZE: usize = 8;

/// Row height in the results table (in logical pixels).
pub const TABLE_ROW_HEIGHT: f32 = 26.0;

/// Maximum number of errors to retain in the error list.
pub const MAX_ERRORS: usize = 200;

/// How long a transient export status message stays visible (seconds).
pub const EXPORT_MESSAGE_TTL_SECS: u64 = 4;

/// Application data subdirectory name for logs.
pub const APP_DATA_DIR: &str = "RobotScope";

/// Log subdirectory name under the app data directory.
pub const LOG_DIR: &str = "logs";

/// Log file name for persistent error/debug logging.
pub const LOG_FILE_NAME: &str = "robotscope.log";

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;
