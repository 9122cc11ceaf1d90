//! RobotScope — a desktop viewer for robots.txt batch analysis results.
//!
//! The library exposes the data model, filtering/sorting logic, submission
//! feedback, background worker plumbing, and the export writers so they can
//! be tested and embedded independently of the UI shell.

pub mod core;
pub mod export;
pub mod util;
