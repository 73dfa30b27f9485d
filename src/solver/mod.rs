//! Letter Boxed solving machinery
//!
//! This module contains the staged breadth-first search engine and its
//! supporting types.

mod branch;
mod engine;
mod frontier;
mod mode;

pub use engine::{Solution, Solver};
pub use mode::SolveMode;
