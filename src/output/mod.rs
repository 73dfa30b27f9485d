//! Terminal output formatting
//!
//! Pretty-printing for solve, analyze, and build-dict reports.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_report, print_build_report, print_solve_report};
