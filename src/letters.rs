use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

// Character-set constants
#[cfg(test)]
const ALPHABET_SIZE: usize = 26;
pub const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Placeholder letter for cells a short grid row never filled.
pub const FILLER: char = '*';

/// Normalize a puzzle character to the single case used for matching.
#[inline]
pub(crate) fn normalize(c: char) -> char {
    c.to_ascii_uppercase()
}

/// Per-letter count of the letters on found words' paths.
///
/// Only letters that were actually claimed by a found word are counted;
/// a letter shared by two found words is counted once for each.
/// Counts only ever grow during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LetterTally {
    counts: BTreeMap<char, usize>,
}

impl LetterTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }

    /// Count for `letter` (zero if it never appeared on a found path).
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Sum over all letters.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Non-zero counts in character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// Every letter A-Z with its count, zeros included.
    pub fn alphabet(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        UPPERCASE_ALPHABET.map(|c| (c, self.get(c)))
    }

    pub(crate) fn clear(&mut self) {
        self.counts.clear();
    }
}

impl fmt::Display for LetterTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.iter().map(|(c, n)| format!("{c}:{n}")).collect();
        write!(f, "{{{}}}", pairs.join(", "))
    }
}
