use backsolve_core::{Digit, Grid};

/// Statistics collected during a backtracking solve.
///
/// Tracks how many tentative placements the search made and how many of
/// them it had to undo. The counters are purely observational and never
/// influence the search.
///
/// # Examples
///
/// ```
/// use backsolve_core::Grid;
/// use backsolve_solver::{BacktrackingSolver, SolveStats};
///
/// let solver = BacktrackingSolver::new();
/// let mut grid = Grid::new();
/// let mut stats = SolveStats::new();
///
/// assert!(solver.solve_with_stats(&mut grid, &mut stats));
/// assert!(stats.has_progress());
/// assert_eq!(stats.placements() - stats.backtracks(), 81);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    placements: usize,
    backtracks: usize,
}

impl SolveStats {
    /// Creates a zeroed statistics object.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            placements: 0,
            backtracks: 0,
        }
    }

    /// Returns the number of tentative placements made by the search.
    #[must_use]
    pub fn placements(&self) -> usize {
        self.placements
    }

    /// Returns the number of placements the search had to undo.
    ///
    /// On a successful solve, `placements() - backtracks()` equals the
    /// number of cells the search filled.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the total number of search steps (placements plus undos).
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.placements + self.backtracks
    }

    /// Returns `true` if the search did any work at all.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps() > 0
    }
}

/// Exhaustive depth-first backtracking search over a [`Grid`].
///
/// The search order is fixed: empty cells are visited in row-major order
/// and candidates are tried in ascending order ([`Digit::ALL`]), so for any
/// given starting grid the first solution found is deterministic. Cells
/// filled by clues are never touched; on failure every cell the search
/// modified is restored to empty before returning.
///
/// # Examples
///
/// ```
/// use backsolve_core::Grid;
/// use backsolve_solver::BacktrackingSolver;
///
/// let solver = BacktrackingSolver::new();
/// let mut grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert!(solver.solve(&mut grid));
/// assert!(grid.is_solved());
/// # Ok::<(), backsolve_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fills every empty cell of `grid` so that the Sudoku invariant
    /// holds, or returns `false` if no assignment exists.
    ///
    /// On `true`, the grid is fully and validly assigned. On `false`, the
    /// grid is left exactly as it was passed in.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        let mut stats = SolveStats::new();
        self.solve_with_stats(grid, &mut stats)
    }

    /// Like [`solve`], accumulating search statistics into `stats`.
    ///
    /// Statistics accumulate across calls, so a fresh [`SolveStats`] is
    /// needed to measure a single solve.
    ///
    /// [`solve`]: Self::solve
    pub fn solve_with_stats(&self, grid: &mut Grid, stats: &mut SolveStats) -> bool {
        // Base case: a grid without empty cells is solved, because every
        // placement below was checked against its houses when it was made.
        let Some(pos) = grid.first_empty() else {
            return true;
        };

        for digit in Digit::ALL {
            if !grid.allows(pos, digit) {
                continue;
            }
            grid.set(pos, digit);
            stats.placements += 1;
            if self.solve_with_stats(grid, stats) {
                return true;
            }
            grid.clear(pos);
            stats.backtracks += 1;
        }

        // All nine candidates failed; the caller undoes its own placement.
        false
    }
}
