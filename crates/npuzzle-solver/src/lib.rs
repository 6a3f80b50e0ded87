//! Bounded iterative-deepening solver for sliding-tile puzzles.
//!
//! This crate finds optimal blank-move sequences for the 8-puzzle, the
//! 15-puzzle and their square generalizations, using a Manhattan-distance
//! heuristic and an IDA*-style score bound that grows until the goal is
//! found. The library performs no I/O; the companion binary handles JSON
//! input and output.

pub mod board;
pub mod heuristic;
pub mod search;
pub mod solver;

// Re-export main types
pub use board::{is_solvable, Board, Direction, InputError};
pub use heuristic::GoalBoard;
pub use search::{legal_moves, SearchNode, MOVE_ORDER};
pub use solver::{solve, SolveError, SolverConfig, SolverResult};
