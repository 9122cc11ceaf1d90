//! Export of filtered analysis results to CSV, JSON, and plain text.

pub mod csv_export;
pub mod json_export;
pub mod text_export;
