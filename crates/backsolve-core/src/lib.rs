//! Core data structures for the backsolve Sudoku solver.
//!
//! This crate provides the grid model shared by the solver and the command
//! line frontend:
//!
//! - [`digit`]: type-safe representation of Sudoku digits 1-9
//! - [`position`]: cell coordinates on the 9x9 board
//! - [`grid`]: the board itself, with constraint checking and text rendering
//!
//! # Examples
//!
//! ```
//! use backsolve_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(4, 4), Digit::D5);
//!
//! // Placing 5 anywhere in the same row, column, or box is now rejected.
//! assert!(!grid.allows(Position::new(4, 0), Digit::D5));
//! assert!(grid.allows(Position::new(0, 0), Digit::D5));
//! ```

pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    grid::{Grid, InvalidCellValue, ParseGridError},
    position::Position,
};
