//! Parallel backtracking solver for edge-matching tile puzzles.
//!
//! Each worker seeds its own copy of the board with a different corner tile
//! and runs a plain depth-first search from there. The first worker to fill
//! its board tells the others to stop; the lowest rank that finished reports
//! the solution.

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod corners;
pub mod error;
pub mod generator;
pub mod partition;
pub mod puzzle;
pub mod solve_puzzle;
pub mod solver_data;
pub mod structs;
pub mod termination;
pub mod util;

pub use config::SolverConfig;
pub use coordinator::{solve, RunOutcome};
pub use error::{InputError, Result, SolverError};
pub use puzzle::Puzzle;
pub use solver_data::{prepare_solver_data, SolverData};
