//! Error types for loading and searching puzzles, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W009) for documentation lookup:
//!
//! - W001: `MalformedGridRowCount` (Wrong number of grid rows)
//! - W002: `MalformedGridRowLength` (Grid row longer, or in strict mode shorter, than the dimension)
//! - W003: `CoordinateOutOfRange` (Cell coordinate outside the grid)
//! - W004: `WordIndexOutOfRange` (Word index outside the word list)
//! - W005: `EmptyWordList` (No words supplied)
//! - W006: `EmptyGrid` (No grid rows supplied)
//! - W007: `WordAlreadyFound` (Word marked found twice in one run)
//! - W008: `InvalidDimension` (Grid dimension of zero, or too large)
//! - W009: `Io` (Input file could not be read)
//!
//! # Examples
//!
//! ```
//! use wordseek::errors::{ErrorKind, PuzzleError};
//! use wordseek::grid::{Grid, GridConfig};
//!
//! let config = GridConfig::with_dimension(3);
//! match Grid::load(config, ["ABC", "DEF"]) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "W001");
//!         assert_eq!(e.kind(), ErrorKind::MalformedGrid);
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("two rows cannot fill a 3x3 grid"),
//! }
//! ```

use std::io;
use std::path::PathBuf;

/// Coarse classification of a [`PuzzleError`], for callers that only care
/// about what went wrong and not the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedGrid,
    OutOfRange,
    EmptyInput,
    Logic,
    Config,
    Io,
}

/// Custom error type for puzzle loading and search operations
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("grid has {found} rows, expected {expected}")]
    MalformedGridRowCount { found: usize, expected: usize },

    #[error("grid row {row} has {len} letters, expected {dimension}")]
    MalformedGridRowLength { row: usize, len: usize, dimension: usize },

    #[error("cell ({row}, {col}) is outside the {dimension}x{dimension} grid")]
    CoordinateOutOfRange { row: usize, col: usize, dimension: usize },

    #[error("word index {index} is outside the word list (len={len})")]
    WordIndexOutOfRange { index: usize, len: usize },

    #[error("word list is empty")]
    EmptyWordList,

    #[error("grid is empty")]
    EmptyGrid,

    #[error("word {index} was already marked found in this run")]
    WordAlreadyFound { index: usize },

    #[error("invalid grid dimension: {dimension}")]
    InvalidDimension { dimension: usize },

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::MalformedGridRowCount { .. } => "W001",
            PuzzleError::MalformedGridRowLength { .. } => "W002",
            PuzzleError::CoordinateOutOfRange { .. } => "W003",
            PuzzleError::WordIndexOutOfRange { .. } => "W004",
            PuzzleError::EmptyWordList => "W005",
            PuzzleError::EmptyGrid => "W006",
            PuzzleError::WordAlreadyFound { .. } => "W007",
            PuzzleError::InvalidDimension { .. } => "W008",
            PuzzleError::Io { .. } => "W009",
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PuzzleError::MalformedGridRowCount { .. }
            | PuzzleError::MalformedGridRowLength { .. } => ErrorKind::MalformedGrid,
            PuzzleError::CoordinateOutOfRange { .. }
            | PuzzleError::WordIndexOutOfRange { .. } => ErrorKind::OutOfRange,
            PuzzleError::EmptyWordList | PuzzleError::EmptyGrid => ErrorKind::EmptyInput,
            PuzzleError::WordAlreadyFound { .. } => ErrorKind::Logic,
            PuzzleError::InvalidDimension { .. } => ErrorKind::Config,
            PuzzleError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::MalformedGridRowCount { .. } => "Wrong number of grid rows",
            PuzzleError::MalformedGridRowLength { .. } => "Grid row does not fit the dimension",
            PuzzleError::CoordinateOutOfRange { .. } => "Cell coordinate outside the grid",
            PuzzleError::WordIndexOutOfRange { .. } => "Word index outside the word list",
            PuzzleError::EmptyWordList => "No words supplied",
            PuzzleError::EmptyGrid => "No grid rows supplied",
            PuzzleError::WordAlreadyFound { .. } => "Word marked found twice in one run",
            PuzzleError::InvalidDimension { .. } => "Grid dimension out of range",
            PuzzleError::Io { .. } => "Input file could not be read",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::MalformedGridRowCount { .. } => "The grid text must contain exactly one non-blank line per row of the configured dimension. Blank lines are ignored before counting.",
            PuzzleError::MalformedGridRowLength { .. } => "A row longer than the dimension is always rejected rather than truncated. A shorter row is rejected in strict mode; with padding enabled the missing cells keep the '*' filler.",
            PuzzleError::CoordinateOutOfRange { .. } => "Row and column must both lie in [0, N) where N is the grid dimension.",
            PuzzleError::WordIndexOutOfRange { .. } => "Word indices refer to positions in the loaded word list, starting at 0.",
            PuzzleError::EmptyWordList => "The word list text contained no non-blank lines.",
            PuzzleError::EmptyGrid => "The grid text contained no non-blank lines.",
            PuzzleError::WordAlreadyFound { .. } => "Each word is placed at most once per run. A second placement of the same word indicates a bug in the caller or the engine.",
            PuzzleError::InvalidDimension { .. } => "A grid needs at least one row and one column, and its N×N cell count must fit in a usize.",
            PuzzleError::Io { .. } => "The word list or grid file could not be opened or was not valid UTF-8.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::MalformedGridRowCount { .. } => Some("Check the --dimension flag against the number of lines in the grid file"),
            PuzzleError::MalformedGridRowLength { .. } => Some("Fix the row, or pass --pad-short-rows to accept rows shorter than the dimension"),
            PuzzleError::EmptyWordList => Some("Put one word per line in the word list file"),
            PuzzleError::EmptyGrid => Some("Put one row of letters per line in the grid file"),
            PuzzleError::InvalidDimension { .. } => Some("Example: --dimension 20"),
            PuzzleError::Io { .. } => Some("Check that the path exists and is readable"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
