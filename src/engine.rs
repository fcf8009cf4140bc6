//! The search engine: finds every listed word in the grid, then reads the solution.
//!
//! # Algorithm
//!
//! Words are processed in list order. For each word, start cells are scanned in
//! row-major order; at a cell holding the word's first letter each of the eight
//! [`Direction`]s is tried in [`Direction::ALL`] order. A direction is abandoned
//! at the first step that leaves the grid or hits a different letter. The first
//! full match wins and the search moves on to the next word.
//!
//! A confirmed placement highlights every cell on its path and adds each of
//! those letters to the [`LetterTally`]. Once every word has been attempted the
//! grid is swept row-major and the letters of all cells still unhighlighted
//! form the solution string.
//!
//! # Stepping
//!
//! [`SearchEngine::step`] advances by one unit of work and reports what happened,
//! so a caller-owned scheduler can pace an animated reveal. [`SearchEngine::run`]
//! simply steps to completion; both end in identical state.
//!
//! ```
//! use wordseek::engine::{SearchEngine, StepStatus};
//! use wordseek::grid::{Grid, GridConfig};
//! use wordseek::word_list::WordList;
//!
//! let grid = Grid::load(GridConfig::with_dimension(3), ["CAT", "XOX", "XXX"])?;
//! let words = WordList::load(["cat"])?;
//! let mut engine = SearchEngine::new(grid, words);
//!
//! let mut found = Vec::new();
//! loop {
//!     match engine.step()? {
//!         StepStatus::WordFound(index) => found.push(index),
//!         StepStatus::AllDone => break,
//!         _ => {}
//!     }
//! }
//! assert_eq!(found, vec![0]);
//! assert_eq!(engine.solution(), "XOXXXX");
//! # Ok::<(), wordseek::errors::PuzzleError>(())
//! ```

use std::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::direction::{Direction, NUM_DIRECTIONS};
use crate::errors::PuzzleError;
use crate::grid::{Coord, Grid, GridConfig};
use crate::letters::LetterTally;
use crate::word_list::WordList;

/// Where the engine is in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing has been attempted yet.
    Idle,
    /// Trying `word` from row-major start `cell` in direction index `direction`.
    Searching { word: usize, cell: usize, direction: usize },
    /// Every word attempted; sweeping row-major `cell` for the solution.
    Solving { cell: usize },
    Done,
}

/// Outcome of a single [`SearchEngine::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    InProgress,
    /// The word at this index was placed and its path highlighted.
    WordFound(usize),
    /// The word at this index has no placement in the grid.
    WordExhausted(usize),
    AllDone,
}

/// A found word's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub word_index: usize,
    pub start: Coord,
    pub direction: Direction,
    /// Cells from the first letter to the last.
    pub path: Vec<Coord>,
}

impl Placement {
    #[must_use]
    pub fn end(&self) -> Coord {
        self.path.last().copied().unwrap_or(self.start)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} → {}", self.start, self.direction, self.end())
    }
}

/// Per-word line of a [`SearchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    pub text: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
}

/// Everything a display layer needs once a run has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub dimension: usize,
    pub words: Vec<WordReport>,
    pub tally: LetterTally,
    pub solution: String,
    /// False if the report was taken before the run reached `Done`.
    pub complete: bool,
}

impl SearchReport {
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }
}

/// Owns a grid and word list for the duration of a run and mutates both.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    grid: Grid,
    words: WordList,
    tally: LetterTally,
    placements: Vec<Option<Placement>>,
    solution: String,
    state: EngineState,
    // letters of the word currently being searched
    current: Vec<char>,
}

impl SearchEngine {
    #[must_use]
    pub fn new(grid: Grid, words: WordList) -> Self {
        let placements = vec![None; words.len()];
        Self {
            grid,
            words,
            tally: LetterTally::new(),
            placements,
            solution: String::new(),
            state: EngineState::Idle,
            current: Vec::new(),
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn tally(&self) -> &LetterTally {
        &self.tally
    }

    /// Solution letters collected so far (complete once the run is done).
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == EngineState::Done
    }

    /// Placement of the word at `index`, if it has been found.
    ///
    /// # Errors
    ///
    /// `WordIndexOutOfRange` if `index` is not a word index.
    pub fn placement(&self, index: usize) -> Result<Option<&Placement>, PuzzleError> {
        self.placements
            .get(index)
            .map(Option::as_ref)
            .ok_or(PuzzleError::WordIndexOutOfRange { index, len: self.placements.len() })
    }

    /// All placements found so far, in word-list order.
    pub fn placements(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().flatten()
    }

    /// Advance the run by one unit of work.
    ///
    /// One unit is a single (start cell, direction) trial, or one start cell
    /// whose letter cannot begin the word, or one cell of the solution sweep.
    /// A found path is highlighted in the same step that confirms it, so the
    /// engine is consistent between any two steps. After the run is done this
    /// keeps returning [`StepStatus::AllDone`].
    ///
    /// # Errors
    ///
    /// Only on an internal inconsistency (a word placed twice); a word that
    /// cannot be found is reported as [`StepStatus::WordExhausted`].
    pub fn step(&mut self) -> Result<StepStatus, PuzzleError> {
        match self.state {
            EngineState::Idle => {
                debug!("Searching {} words in {d}x{d} grid", self.words.len(), d = self.grid.dimension());
                self.enter_word(0);
                self.step()
            }
            EngineState::Searching { word, cell, direction } => self.search_step(word, cell, direction),
            EngineState::Solving { cell } => Ok(self.solve_step(cell)),
            EngineState::Done => Ok(StepStatus::AllDone),
        }
    }

    /// Step until done and return the report.
    ///
    /// # Errors
    ///
    /// Same as [`SearchEngine::step`].
    pub fn run(&mut self) -> Result<SearchReport, PuzzleError> {
        while self.step()? != StepStatus::AllDone {}
        Ok(self.report())
    }

    /// Restart: clear highlights, found flags, tally, placements and solution.
    pub fn reset(&mut self) {
        self.grid.reset_all();
        self.words.reset_all();
        self.tally.clear();
        self.placements.iter_mut().for_each(|p| *p = None);
        self.solution.clear();
        self.current.clear();
        self.state = EngineState::Idle;
        debug!("Engine reset");
    }

    /// Snapshot of the current results.
    #[must_use]
    pub fn report(&self) -> SearchReport {
        let words = self
            .words
            .iter()
            .zip(&self.placements)
            .map(|(word, placement)| WordReport {
                text: word.text.clone(),
                found: word.found,
                placement: placement.clone(),
            })
            .collect();

        SearchReport {
            dimension: self.grid.dimension(),
            words,
            tally: self.tally.clone(),
            solution: self.solution.clone(),
            complete: self.is_done(),
        }
    }

    fn enter_word(&mut self, word: usize) {
        match self.words.get(word) {
            Some(w) => {
                self.current = w.text.chars().collect();
                self.state = EngineState::Searching { word, cell: 0, direction: 0 };
            }
            None => {
                self.current.clear();
                self.state = EngineState::Solving { cell: 0 };
            }
        }
    }

    fn search_step(&mut self, word: usize, cell: usize, direction: usize) -> Result<StepStatus, PuzzleError> {
        let Some(&first) = self.current.first() else {
            return Ok(self.exhaust(word));
        };

        let start = self.grid.coord_of(cell);
        if self.grid.letter(start.row, start.col) != first {
            return Ok(self.advance(word, cell + 1, 0));
        }

        let dir = Direction::ALL[direction];
        if let Some(path) = self.trace(start, dir) {
            self.claim(word, start, dir, path)?;
            self.enter_word(word + 1);
            return Ok(StepStatus::WordFound(word));
        }

        if direction + 1 < NUM_DIRECTIONS {
            Ok(self.advance(word, cell, direction + 1))
        } else {
            Ok(self.advance(word, cell + 1, 0))
        }
    }

    /// Walk the current word from `start` along `dir`; the first letter is
    /// already known to match. `None` on leaving the grid or a mismatch.
    fn trace(&self, start: Coord, dir: Direction) -> Option<Vec<Coord>> {
        let (dr, dc) = dir.delta();
        let mut path = Vec::with_capacity(self.current.len());
        path.push(start);

        for (i, &expected) in self.current.iter().enumerate().skip(1) {
            let step = i as isize;
            let row = start.row as isize + dr * step;
            let col = start.col as isize + dc * step;
            if !self.grid.in_bounds(row, col) {
                return None;
            }
            let (row, col) = (row as usize, col as usize);
            if self.grid.letter(row, col) != expected {
                return None;
            }
            path.push(Coord::new(row, col));
        }

        Some(path)
    }

    fn claim(&mut self, word: usize, start: Coord, direction: Direction, path: Vec<Coord>) -> Result<(), PuzzleError> {
        // flag first: if this fails nothing else has been touched
        self.words.mark_found(word)?;

        for coord in &path {
            self.grid.mark_highlighted(coord.row, coord.col)?;
            self.tally.increment(self.grid.letter(coord.row, coord.col));
        }

        let placement = Placement { word_index: word, start, direction, path };
        debug!("Found {} at {placement}", self.words.get(word).map_or("", |w| w.text.as_str()));
        self.placements[word] = Some(placement);
        Ok(())
    }

    fn advance(&mut self, word: usize, cell: usize, direction: usize) -> StepStatus {
        if cell >= self.grid.len() {
            return self.exhaust(word);
        }
        self.state = EngineState::Searching { word, cell, direction };
        StepStatus::InProgress
    }

    fn exhaust(&mut self, word: usize) -> StepStatus {
        info!("Not found: {}", self.words.get(word).map_or("", |w| w.text.as_str()));
        self.enter_word(word + 1);
        StepStatus::WordExhausted(word)
    }

    fn solve_step(&mut self, cell: usize) -> StepStatus {
        let coord = self.grid.coord_of(cell);
        if let Ok(c) = self.grid.cell_at(coord.row, coord.col) {
            if !c.highlighted {
                self.solution.push(c.letter);
            }
        }

        if cell + 1 < self.grid.len() {
            self.state = EngineState::Solving { cell: cell + 1 };
            return StepStatus::InProgress;
        }

        self.state = EngineState::Done;
        info!(
            "Found {}/{} words; solution: {}",
            self.words.found_count(),
            self.words.len(),
            self.solution
        );
        StepStatus::AllDone
    }
}

/// Load both text blocks and run a search to completion.
///
/// # Errors
///
/// Any load error from [`Grid::parse_from_str`] or [`WordList::parse_from_str`].
pub fn solve_puzzle(config: GridConfig, words_text: &str, grid_text: &str) -> Result<SearchReport, PuzzleError> {
    let words = WordList::parse_from_str(words_text)?;
    let grid = Grid::parse_from_str(config, grid_text)?;
    SearchEngine::new(grid, words).run()
}
