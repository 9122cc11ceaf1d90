//! Unified error types for RobotScope.
//!
//! All fallible operations throughout the codebase return
//! `Result<T, RobotScopeError>`. This ensures consistent error reporting and
//! clean propagation via the `?` operator.

/// Unified error type used throughout RobotScope.
///
/// Each variant captures enough context to produce an actionable message for
/// the user or for log output.
#[derive(Debug, thiserror::Error)]
pub enum RobotScopeError {
    /// A report file could not be read or loaded.
    #[error("Report import failed: {0}")]
    Import(String),

    /// A report file was readable but its contents are not a valid
    /// analysis report.
    #[error("Invalid report format: {0}")]
    ReportFormat(String),

    /// Export (CSV, JSON or text) failed — typically an I/O error.
    #[error("Export failed: {0}")]
    Export(String),

    /// Catch-all for I/O errors (file writes, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RobotScopeError>;
