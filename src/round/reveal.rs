//! Letters of the secret confirmed so far

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Marker for a position nobody has hit yet
pub const PLACEHOLDER: char = '_';

/// Per-position record of letters confirmed by correct-position hits
///
/// Slots only ever go from unknown to a letter; a later guess that misses a
/// position leaves what was already confirmed in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    slots: Vec<Option<u8>>,
}

impl RevealState {
    /// All positions unknown
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            slots: vec![None; word_length],
        }
    }

    /// Record `letter` as confirmed at `position`
    pub(crate) fn confirm(&mut self, position: usize, letter: u8) {
        self.slots[position] = Some(letter);
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Confirmed letter at a position, if any
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.slots.get(position).copied().flatten().map(char::from)
    }

    /// Number of confirmed positions
    #[must_use]
    pub fn confirmed(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Each slot as a one-character string, `"_"` when unknown
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.chars().map(String::from).collect()
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.slots
            .iter()
            .map(|slot| slot.map_or(PLACEHOLDER, char::from))
    }
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl Serialize for RevealState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.slots.len()))?;
        for ch in self.chars() {
            seq.serialize_element(&ch.to_string())?;
        }
        seq.end()
    }
}
