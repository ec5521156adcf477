//! Word pool: the immutable set of candidate secrets for one word length

use super::WordSource;
use crate::core::Word;
use crate::error::{GameError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Candidate secret words of a single, fixed length
///
/// Built once and never mutated, so one pool can back every session that
/// plays the same word length.
#[derive(Debug, Clone)]
pub struct WordPool {
    word_length: usize,
    words: Vec<Word>,
}

impl WordPool {
    /// Build a pool from candidate words
    ///
    /// Words of any other length are dropped with a warning, and duplicates
    /// are collapsed. The pool is kept sorted so that selection with a seeded
    /// random source is reproducible.
    pub fn new(word_length: usize, words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words
            .into_iter()
            .filter(|word| {
                let fits = word.len() == word_length;
                if !fits {
                    warn!(word = %word, word_length, "dropping word of the wrong length from pool");
                }
                fits
            })
            .collect();
        words.sort_unstable();
        words.dedup();

        Self { word_length, words }
    }

    /// Load the pool for `word_length` from a word source
    ///
    /// # Errors
    ///
    /// Propagates the source's error when no list exists for that length.
    pub fn from_source<S: WordSource + ?Sized>(source: &S, word_length: usize) -> Result<Self> {
        let pool = Self::new(word_length, source.words(word_length)?);
        debug!(word_length, size = pool.len(), "word pool loaded");
        Ok(pool)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in the pool, sorted
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check whether a word (any case) is in the pool
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        let text = text.to_ascii_lowercase();
        self.words
            .binary_search_by(|word| word.text().cmp(text.as_str()))
            .is_ok()
    }

    /// Pick a word uniformly at random, skipping previously used words
    ///
    /// `excluding` is compared case-insensitively and may contain words that
    /// are not in the pool at all.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyPool` if every word is excluded or the pool
    /// is empty.
    ///
    /// # Examples
    /// ```
    /// use lingo_engine::core::Word;
    /// use lingo_engine::wordlists::WordPool;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let pool = WordPool::new(5, ["lingo", "sheep"].map(|w| Word::new(w).unwrap()));
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let word = pool.select_word(&["LINGO"], &mut rng).unwrap();
    /// assert_eq!(word.text(), "sheep");
    /// assert!(pool.select_word(&["lingo", "sheep"], &mut rng).is_err());
    /// ```
    pub fn select_word<S, R>(&self, excluding: &[S], rng: &mut R) -> Result<&Word>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let excluded: FxHashSet<String> = excluding
            .iter()
            .map(|word| word.as_ref().trim().to_ascii_lowercase())
            .collect();

        let candidates: Vec<&Word> = self
            .words
            .iter()
            .filter(|word| !excluded.contains(word.text()))
            .collect();

        candidates
            .choose(rng)
            .copied()
            .ok_or(GameError::EmptyPool {
                word_length: self.word_length,
            })
    }
}
