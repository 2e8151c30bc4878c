//! Depth-first backtracking search for the backsolve Sudoku solver.
//!
//! The search is deliberately naive: it scans for the first empty cell in
//! row-major order, tries candidates in ascending order, and undoes each
//! placement that leads to a dead end. There is no constraint propagation
//! and no cell-selection heuristic, so the first solution found for a given
//! grid is always the same.

pub use self::backtracking::{BacktrackingSolver, SolveStats};

mod backtracking;
