//! UI sub-module re-exports for RobotScope.
//!
//! Each sub-module adds rendering methods to [`crate::app::RobotScopeApp`]
//! via `impl` blocks, keeping UI code cleanly separated from state
//! management.

pub mod detail_window;
pub mod filter_bar;
pub mod results_table;
pub mod status_bar;
pub mod submit_panel;
pub mod theme;
pub mod toolbar;
