//! Naive backtracking solver for standard 9x9 Sudoku.
//!
//! The grid keeps three redundant views of the same 81 cells (row-major,
//! column-major, block-major) so every uniqueness check scans exactly
//! nine values. The search is plain chronological backtracking over the
//! initially-empty cells: no candidate sets, no propagation.

mod checker;
mod grid;
mod solver;

pub use grid::{Grid, ParseGridError, Position};
pub use solver::{SolveOutcome, Solver};
