//! Time formatting helpers for RobotScope.
//!
//! Provides consistent duration/timestamp display across the UI and the
//! export file names.

/// Format a `std::time::Duration` into a human-readable string.
///
/// Used in the status bar to show how long the last analysis run took.
/// Examples: `0.3s`, `1.2s`, `45.6s`.
pub fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.01 {
        format!("{:.1}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}m")
    }
}

/// Timestamp string used in default export file names,
/// e.g. `robots_analysis_20260830_142501.csv`.
pub fn export_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_millis() {
        let d = std::time::Duration::from_millis(5);
        let s = format_duration(d);
        assert!(s.contains("ms"), "Expected ms, got: {s}");
    }

    #[test]
    fn test_format_duration_seconds() {
        let d = std::time::Duration::from_millis(1200);
        let s = format_duration(d);
        assert_eq!(s, "1.2s");
    }

    #[test]
    fn test_format_duration_minutes() {
        let d = std::time::Duration::from_secs(90);
        let s = format_duration(d);
        assert_eq!(s, "1.5m");
    }
}
