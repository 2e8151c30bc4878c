//! The 9x9 board, constraint checking, and text rendering.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{digit::Digit, position::Position};

/// Separator line printed between bands of three rows.
const SEPARATOR: &str = "----------------------------";

/// A cell value outside the range 0-9 was passed to [`Grid::from_values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cell value {value} at {position} is out of range (expected 0-9)")]
pub struct InvalidCellValue {
    /// The position holding the offending value.
    pub position: Position,
    /// The offending value.
    pub value: u8,
}

/// An error produced when parsing a grid from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The string contains a character that is neither a digit, an
    /// empty-cell marker, nor whitespace.
    #[display("invalid character {character:?} in grid string")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The string does not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

/// A 9x9 Sudoku board.
///
/// Each cell holds an `Option<Digit>`, `None` meaning empty. The grid is
/// plain value state: the solver mutates it in place through [`set`] and
/// [`clear`] and queries it through the constraint predicates.
///
/// # Examples
///
/// ```
/// use backsolve_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// assert_eq!(grid.empty_count(), 81);
///
/// grid.set(Position::new(0, 0), Digit::D9);
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D9));
/// assert!(!grid.allows(Position::new(5, 0), Digit::D9));
/// ```
///
/// [`set`]: Grid::set
/// [`clear`]: Grid::clear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cells indexed `[y][x]`.
    cells: [[Option<Digit>; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// The board dimension.
    pub const SIZE: u8 = 9;

    /// The dimension of one 3x3 box.
    pub const BOX_SIZE: u8 = 3;

    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Creates a grid from a row-major table of values, `0` meaning empty.
    ///
    /// This is the entry path for puzzle literals.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCellValue`] if any value is greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use backsolve_core::{Digit, Grid, Position};
    ///
    /// let mut values = [[0; 9]; 9];
    /// values[0][3] = 4;
    ///
    /// let grid = Grid::from_values(values)?;
    /// assert_eq!(grid.get(Position::new(3, 0)), Some(Digit::D4));
    /// assert_eq!(grid.empty_count(), 80);
    /// # Ok::<(), backsolve_core::InvalidCellValue>(())
    /// ```
    pub fn from_values(values: [[u8; 9]; 9]) -> Result<Self, InvalidCellValue> {
        let mut grid = Self::new();
        for (y, row) in values.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                #[expect(clippy::cast_possible_truncation)]
                let position = Position::new(x as u8, y as u8);
                match value {
                    0 => {}
                    _ => match Digit::new(value) {
                        Some(digit) => grid.set(position, digit),
                        None => return Err(InvalidCellValue { position, value }),
                    },
                }
            }
        }
        Ok(grid)
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }

    /// Assigns a digit to a cell.
    pub fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[usize::from(pos.y())][usize::from(pos.x())] = Some(digit);
    }

    /// Empties a cell.
    pub fn clear(&mut self, pos: Position) {
        self.cells[usize::from(pos.y())][usize::from(pos.x())] = None;
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// grid is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use backsolve_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
    ///
    /// grid.set(Position::new(0, 0), Digit::D1);
    /// assert_eq!(grid.first_empty(), Some(Position::new(1, 0)));
    /// ```
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&pos| self.get(pos).is_none())
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        Position::ALL
            .iter()
            .filter(|&&pos| self.get(pos).is_none())
            .count()
    }

    /// Returns `true` if no cell in row `y` holds `digit`.
    #[must_use]
    pub fn row_allows(&self, y: u8, digit: Digit) -> bool {
        (0..Self::SIZE).all(|x| self.get(Position::new(x, y)) != Some(digit))
    }

    /// Returns `true` if no cell in column `x` holds `digit`.
    #[must_use]
    pub fn col_allows(&self, x: u8, digit: Digit) -> bool {
        (0..Self::SIZE).all(|y| self.get(Position::new(x, y)) != Some(digit))
    }

    /// Returns `true` if no cell in the 3x3 box containing `pos` holds
    /// `digit`.
    #[must_use]
    pub fn box_allows(&self, pos: Position, digit: Digit) -> bool {
        let box_index = pos.box_index();
        (0..Self::SIZE).all(|cell| self.get(Position::from_box(box_index, cell)) != Some(digit))
    }

    /// Returns `true` if placing `digit` at `pos` violates no Sudoku rule
    /// given the current, possibly partial, grid state.
    ///
    /// This is a pure query over the grid; it does not inspect or modify
    /// the cell at `pos` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use backsolve_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(0, 0), Digit::D5);
    ///
    /// assert!(!grid.allows(Position::new(8, 0), Digit::D5)); // same row
    /// assert!(!grid.allows(Position::new(0, 8), Digit::D5)); // same column
    /// assert!(!grid.allows(Position::new(1, 1), Digit::D5)); // same box
    /// assert!(grid.allows(Position::new(4, 4), Digit::D5));
    /// ```
    #[must_use]
    pub fn allows(&self, pos: Position, digit: Digit) -> bool {
        self.row_allows(pos.y(), digit)
            && self.col_allows(pos.x(), digit)
            && self.box_allows(pos, digit)
    }

    /// Returns `true` if the grid is completely filled and every row,
    /// column, and box contains each digit 1-9 exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use backsolve_core::Grid;
    ///
    /// assert!(!Grid::new().is_solved());
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        // On a full grid, "each house contains each digit" implies "exactly
        // once": nine cells, nine digits.
        Digit::ALL.into_iter().all(|digit| {
            (0..Self::SIZE).all(|i| {
                !self.row_allows(i, digit)
                    && !self.col_allows(i, digit)
                    && (0..Self::SIZE).any(|cell| self.get(Position::from_box(i, cell)) == Some(digit))
            })
        })
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from a string.
    ///
    /// Digits 1-9 are filled cells; `.`, `_`, or `0` are empty cells;
    /// whitespace is ignored. The string must contain exactly 81 cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use backsolve_core::{Digit, Grid, Position};
    ///
    /// let grid: Grid = "
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
    /// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
    /// assert_eq!(grid.get(Position::new(2, 0)), None);
    /// # Ok::<(), backsolve_core::ParseGridError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(81);
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            cells.push(match character {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = character as u8 - b'0';
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            });
        }
        if cells.len() != 81 {
            return Err(ParseGridError::WrongCellCount { count: cells.len() });
        }

        let mut grid = Self::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            if let Some(digit) = cell {
                grid.set(pos, digit);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    /// Renders the grid as aligned text.
    ///
    /// Each cell is padded with one space on either side; empty cells
    /// render as a blank. A bar separates box columns and a dashed line
    /// separates box rows, so a grid renders as 11 lines, each terminated
    /// with a line break.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..Self::SIZE {
            if y % Self::BOX_SIZE == 0 && y != 0 {
                writeln!(f, "{SEPARATOR}")?;
            }
            for x in 0..Self::SIZE {
                if x % Self::BOX_SIZE == 0 && x != 0 {
                    write!(f, "|")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, " {digit} ")?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn position_strategy() -> impl Strategy<Value = Position> {
        (0_u8..9, 0_u8..9).prop_map(|(x, y)| Position::new(x, y))
    }

    fn digit_strategy() -> impl Strategy<Value = Digit> {
        (1_u8..=9).prop_map(Digit::from_value)
    }

    #[test]
    fn test_set_get_clear() {
        let mut grid = Grid::new();
        let pos = Position::new(3, 5);

        assert_eq!(grid.get(pos), None);
        grid.set(pos, Digit::D7);
        assert_eq!(grid.get(pos), Some(Digit::D7));
        grid.clear(pos);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_from_values_zero_is_empty() {
        let mut values = [[0; 9]; 9];
        values[2][6] = 3;

        let grid = Grid::from_values(values).unwrap();
        assert_eq!(grid.get(Position::new(6, 2)), Some(Digit::D3));
        assert_eq!(grid.empty_count(), 80);
    }

    #[test]
    fn test_from_values_rejects_out_of_range() {
        let mut values = [[0; 9]; 9];
        values[4][4] = 12;

        let err = Grid::from_values(values).unwrap_err();
        assert_eq!(err.position, Position::new(4, 4));
        assert_eq!(err.value, 12);
        assert_eq!(
            err.to_string(),
            "cell value 12 at (4, 4) is out of range (expected 0-9)"
        );
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = Grid::new();
        for x in 0..9 {
            grid.set(Position::new(x, 0), Digit::from_value(x + 1));
        }
        assert_eq!(grid.first_empty(), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_allows_checks_row_col_box() {
        let mut grid = Grid::new();
        grid.set(Position::new(4, 4), Digit::D6);

        assert!(!grid.row_allows(4, Digit::D6));
        assert!(grid.row_allows(0, Digit::D6));
        assert!(!grid.col_allows(4, Digit::D6));
        assert!(grid.col_allows(0, Digit::D6));
        assert!(!grid.box_allows(Position::new(3, 3), Digit::D6));
        assert!(grid.box_allows(Position::new(0, 0), Digit::D6));

        // A digit present in none of the three houses is accepted.
        assert!(grid.allows(Position::new(0, 0), Digit::D6));
        assert!(grid.allows(Position::new(4, 4), Digit::D1));
    }

    #[test]
    fn test_parse_and_solved_check() {
        let solved: Grid = "
            976 312 854
            481 765 392
            235 948 617
            164 823 579
            357 194 268
            829 576 431
            598 231 746
            612 457 983
            743 689 125
        "
        .parse()
        .unwrap();
        assert!(solved.is_full());
        assert!(solved.is_solved());

        // Swapping two cells in a row breaks a column and a box.
        let mut broken = solved.clone();
        broken.set(Position::new(0, 0), Digit::D7);
        broken.set(Position::new(1, 0), Digit::D9);
        assert!(broken.is_full());
        assert!(!broken.is_solved());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "x".repeat(81).parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter { character: 'x' })
        );
        assert_eq!(
            "123".parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { count: 3 })
        );
    }

    #[test]
    fn test_display_layout() {
        let solved: Grid = "
            976 312 854
            481 765 392
            235 948 617
            164 823 579
            357 194 268
            829 576 431
            598 231 746
            612 457 983
            743 689 125
        "
        .parse()
        .unwrap();
        let rendered = solved.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[3], SEPARATOR);
        assert_eq!(lines[7], SEPARATOR);
        assert_eq!(lines[0], " 9  7  6 | 3  1  2 | 8  5  4 ");
        assert_eq!(lines[10], " 7  4  3 | 6  8  9 | 1  2  5 ");

        // Cell rows carry exactly nine digits and two box-boundary bars.
        for line in lines.iter().filter(|line| !line.starts_with('-')) {
            assert_eq!(line.matches('|').count(), 2);
            assert_eq!(line.chars().filter(char::is_ascii_digit).count(), 9);
        }
    }

    #[test]
    fn test_display_renders_empty_as_blank() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Digit::D9);

        let rendered = grid.to_string();
        let first = rendered.lines().next().unwrap();
        assert_eq!(first, " 9       |         |         ");
        assert!(!rendered.contains('0'));
    }

    proptest! {
        #[test]
        fn prop_placement_blocks_houses(
            pos in position_strategy(),
            digit in digit_strategy(),
        ) {
            let mut grid = Grid::new();
            grid.set(pos, digit);

            for &other in &Position::ALL {
                let same_house = other.x() == pos.x()
                    || other.y() == pos.y()
                    || other.box_index() == pos.box_index();
                prop_assert_eq!(grid.allows(other, digit), !same_house);
            }
        }

        #[test]
        fn prop_parse_round_trips_through_values(
            pos in position_strategy(),
            digit in digit_strategy(),
        ) {
            let mut values = [[0; 9]; 9];
            values[usize::from(pos.y())][usize::from(pos.x())] = digit.value();

            let grid = Grid::from_values(values).unwrap();
            prop_assert_eq!(grid.get(pos), Some(digit));
            prop_assert_eq!(grid.empty_count(), 80);
        }
    }
}
