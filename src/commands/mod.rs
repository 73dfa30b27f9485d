//! Command implementations

pub mod analyze;
pub mod build_dict;
pub mod solve;

pub use analyze::{AnalysisReport, analyze_puzzle};
pub use build_dict::{BuildReport, build_dictionary};
pub use solve::{SolveReport, solve_puzzle};
