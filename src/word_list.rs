//! `word_list` — the ordered list of target words for a puzzle.
//!
//! Input is plain text with one word per line. Lines are trimmed, blank lines
//! are skipped, and every word is normalized to uppercase. Input order is kept
//! because the search processes words in that order, and callers display them
//! in that order too.
//!
//! Unlike an entry list for pattern matching, duplicates are *not* removed:
//! a puzzle that lists the same word twice expects two attempts.

use serde::Serialize;

use crate::errors::PuzzleError;
use crate::letters::normalize;

/// One target word and whether it has been found in the current run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub text: String,
    pub found: bool,
}

impl Word {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { text: text.chars().map(normalize).collect(), found: false }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a word list from lines of text.
    ///
    /// # Errors
    ///
    /// `EmptyWordList` if no line contains a word.
    pub fn load<I, S>(lines: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<Word> = lines
            .into_iter()
            .filter_map(|raw_line| {
                let line = raw_line.as_ref().trim();
                (!line.is_empty()).then(|| Word::new(line))
            })
            .collect();

        if words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }

        log::debug!("Loaded {} words", words.len());
        Ok(Self { words })
    }

    /// Parse word-list text (`\n` or `\r\n` separated).
    ///
    /// # Errors
    ///
    /// `EmptyWordList` if the text holds no words.
    pub fn parse_from_str(contents: &str) -> Result<Self, PuzzleError> {
        Self::load(contents.lines())
    }

    /// Read a word-list file and parse it.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`WordList::parse_from_str`].
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref)
            .map_err(|source| PuzzleError::Io { path: path_ref.to_path_buf(), source })?;
        Self::parse_from_str(&data)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }

    /// Flag the word at `index` as found.
    ///
    /// # Errors
    ///
    /// - `WordIndexOutOfRange` if `index >= len()`.
    /// - `WordAlreadyFound` if the word was already found in this run.
    pub fn mark_found(&mut self, index: usize) -> Result<(), PuzzleError> {
        let len = self.words.len();
        let word = self
            .words
            .get_mut(index)
            .ok_or(PuzzleError::WordIndexOutOfRange { index, len })?;
        if word.found {
            return Err(PuzzleError::WordAlreadyFound { index });
        }
        word.found = true;
        Ok(())
    }

    /// Clear every found flag (puzzle restart).
    pub fn reset_all(&mut self) {
        for word in &mut self.words {
            word.found = false;
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
