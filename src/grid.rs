//! `grid` — the fixed-size square letter grid being searched.
//!
//! A [`Grid`] is an N×N row-major array of [`Cell`]s. The dimension comes from
//! [`GridConfig`] and cannot change once the grid is built.
//!
//! Loading is strict about size: a row longer than N is always rejected (never
//! truncated) and the number of rows must equal N. Rows shorter than N are
//! governed by [`RowPolicy`]:
//! - `Strict` rejects them.
//! - `PadWithFiller` accepts them and leaves the trailing cells holding the
//!   [`FILLER`] placeholder, which is how hand-authored puzzles are often laid out.
//!
//! Letters are normalized to uppercase on load so that they compare equal to
//! the (also uppercased) word list.

use std::fmt;

use serde::Serialize;

use crate::errors::PuzzleError;
use crate::letters::{normalize, FILLER};

/// Dimension of the reference puzzle.
pub const DEFAULT_DIMENSION: usize = 20;

/// How to treat grid rows shorter than the configured dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Every row must contain exactly `dimension` letters.
    #[default]
    Strict,
    /// Short rows are accepted; missing cells keep the filler letter.
    PadWithFiller,
}

/// Construction-time grid settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub dimension: usize,
    pub row_policy: RowPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { dimension: DEFAULT_DIMENSION, row_policy: RowPolicy::default() }
    }
}

impl GridConfig {
    #[must_use]
    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension, ..Self::default() }
    }

    #[must_use]
    pub fn row_policy(mut self, row_policy: RowPolicy) -> Self {
        self.row_policy = row_policy;
        self
    }
}

/// A (row, column) grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One grid square. `highlighted` means "claimed by a found word".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: char,
    pub highlighted: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self { letter: FILLER, highlighted: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid of filler cells.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `config.dimension` is zero or N² overflows `usize`.
    pub fn new(config: GridConfig) -> Result<Self, PuzzleError> {
        let n = config.dimension;
        let num_cells = n
            .checked_mul(n)
            .filter(|&cells| cells > 0)
            .ok_or(PuzzleError::InvalidDimension { dimension: n })?;
        Ok(Self {
            dimension: n,
            cells: vec![Cell::default(); num_cells],
        })
    }

    /// Build a grid from its rows, top to bottom.
    ///
    /// The row count is checked before any cell is allocated.
    ///
    /// # Errors
    ///
    /// - `EmptyGrid` if `rows` is empty.
    /// - `MalformedGridRowCount` if the number of rows is not the dimension.
    /// - `MalformedGridRowLength` for a row longer than the dimension, or a
    ///   shorter one under [`RowPolicy::Strict`].
    /// - `InvalidDimension` if the configured dimension is zero or too large.
    pub fn load<I, S>(config: GridConfig, rows: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let n = config.dimension;
        if n == 0 {
            return Err(PuzzleError::InvalidDimension { dimension: n });
        }

        let rows: Vec<S> = rows.into_iter().collect();
        if rows.is_empty() {
            return Err(PuzzleError::EmptyGrid);
        }
        if rows.len() != n {
            return Err(PuzzleError::MalformedGridRowCount { found: rows.len(), expected: n });
        }

        let mut grid = Self::new(config)?;
        for (row, text) in rows.iter().enumerate() {
            let letters: Vec<char> = text.as_ref().chars().collect();
            let too_long = letters.len() > n;
            let too_short = letters.len() < n && config.row_policy == RowPolicy::Strict;
            if too_long || too_short {
                return Err(PuzzleError::MalformedGridRowLength { row, len: letters.len(), dimension: n });
            }

            for (col, c) in letters.into_iter().enumerate() {
                grid.cells[row * n + col].letter = normalize(c);
            }
        }

        log::debug!("Loaded {n}x{n} grid");
        Ok(grid)
    }

    /// Parse grid text: one row per line (`\n` or `\r\n`), blank lines ignored.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::load`].
    pub fn parse_from_str(config: GridConfig, contents: &str) -> Result<Self, PuzzleError> {
        Self::load(config, contents.lines().filter(|line| !line.is_empty()))
    }

    /// Read a grid file and parse it.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`Grid::parse_from_str`].
    pub fn load_from_path<P: AsRef<std::path::Path>>(config: GridConfig, path: P) -> Result<Self, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref)
            .map_err(|source| PuzzleError::Io { path: path_ref.to_path_buf(), source })?;
        Self::parse_from_str(config, &data)
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells (N²).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether a signed coordinate lies inside the grid.
    #[must_use]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.dimension as isize;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    /// # Errors
    ///
    /// `CoordinateOutOfRange` if `row` or `col` is not in `[0, N)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, PuzzleError> {
        let index = self.index_of(row, col)?;
        Ok(&self.cells[index])
    }

    /// Mark a cell as claimed. Marking an already highlighted cell is a no-op.
    ///
    /// # Errors
    ///
    /// `CoordinateOutOfRange` if `row` or `col` is not in `[0, N)`.
    pub fn mark_highlighted(&mut self, row: usize, col: usize) -> Result<(), PuzzleError> {
        let index = self.index_of(row, col)?;
        self.cells[index].highlighted = true;
        Ok(())
    }

    /// Clear every highlight (puzzle restart).
    pub fn reset_all(&mut self) {
        for cell in &mut self.cells {
            cell.highlighted = false;
        }
    }

    /// Cells in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        let n = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / n, i % n), cell))
    }

    /// Row-major position → coordinate. Callers keep `index < len()`.
    #[inline]
    pub(crate) fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.dimension, index % self.dimension)
    }

    /// Unchecked letter lookup for coordinates already known to be in bounds.
    #[inline]
    pub(crate) fn letter(&self, row: usize, col: usize) -> char {
        self.cells[row * self.dimension + col].letter
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, PuzzleError> {
        if row >= self.dimension || col >= self.dimension {
            return Err(PuzzleError::CoordinateOutOfRange { row, col, dimension: self.dimension });
        }
        Ok(row * self.dimension + col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dimension) {
            let line: String = row.iter().map(|cell| cell.letter).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
