//! Position evaluation
//!
//! - [`patterns`]: scoring constants
//! - [`heuristic`]: the line-pattern evaluation used at search leaves

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate_heuristic;
pub use patterns::{PatternScore, Score};
