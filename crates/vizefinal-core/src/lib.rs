//! vizefinal-core — Grade evaluation and goal-solving engine.
//!
//! This crate is the computation core of VizeFinal: given a midterm and final
//! score plus a settings profile it computes the weighted semester grade,
//! letter band, and pass/fail verdict; given a partial input and a target it
//! inverts the weighting formula to find the final-exam score the target
//! requires. Everything is pure and synchronous; the surrounding application
//! owns storage, localization catalogs, and presentation.

pub mod error;
pub mod evaluator;
pub mod messages;
pub mod model;
pub mod solver;

pub use evaluator::evaluate;
pub use solver::solve_goal;
