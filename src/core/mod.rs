//! Core domain modules for RobotScope.
//!
//! Contains the analysis result data model, category filtering, table
//! sorting, submission feedback, the background worker seam, and report
//! import.

pub mod filter;
pub mod record;
pub mod report;
pub mod sort;
pub mod submission;
pub mod worker;
