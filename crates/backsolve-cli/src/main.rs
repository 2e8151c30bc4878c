//! Console frontend for the backsolve Sudoku solver.
//!
//! Solves the fixed puzzle below and prints the result to standard output.
//! No command line arguments are read; `RUST_LOG=debug` exposes search
//! statistics.

use std::process::ExitCode;

use backsolve_core::Grid;
use backsolve_solver::{BacktrackingSolver, SolveStats};

/// The puzzle to solve, row-major, `0` meaning empty.
const PUZZLE: [[u8; 9]; 9] = [
    [9, 0, 0, 3, 1, 0, 0, 0, 0],
    [0, 8, 0, 0, 0, 0, 3, 0, 0],
    [2, 0, 0, 0, 0, 0, 0, 0, 7],
    [0, 6, 4, 8, 0, 0, 0, 0, 0],
    [0, 0, 7, 0, 0, 4, 2, 0, 0],
    [0, 0, 0, 0, 0, 6, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 7, 4, 6],
    [0, 0, 0, 0, 5, 0, 0, 8, 0],
    [0, 0, 0, 0, 8, 9, 0, 2, 0],
];

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let mut grid = match Grid::from_values(PUZZLE) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };

    let solver = BacktrackingSolver::new();
    let mut stats = SolveStats::new();
    if solver.solve_with_stats(&mut grid, &mut stats) {
        log::debug!(
            "solved after {} placements and {} backtracks",
            stats.placements(),
            stats.backtracks()
        );
        println!("Solved!");
        print!("{grid}");
        ExitCode::SUCCESS
    } else {
        log::debug!("search exhausted after {} steps", stats.total_steps());
        println!("No solution found.");
        ExitCode::FAILURE
    }
}
