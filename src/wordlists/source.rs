//! Word sources: where the candidate words for each length come from

use super::embedded;
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use crate::error::{GameError, Result};
use rustc_hash::FxHashMap;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supplies the candidate words for a given word length
///
/// Implementations may return words of other lengths; the pool built from
/// them drops anything that does not fit.
pub trait WordSource {
    /// All candidate words of `word_length` letters
    ///
    /// # Errors
    ///
    /// Returns `GameError::MissingWordList` when the source has nothing for
    /// that length, or `GameError::Io` when the list exists but cannot be read.
    fn words(&self, word_length: usize) -> Result<Vec<Word>>;
}

/// Lists compiled into the binary (4 to 7 letters)
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn words(&self, word_length: usize) -> Result<Vec<Word>> {
        embedded::list_for(word_length)
            .map(words_from_slice)
            .ok_or(GameError::MissingWordList { word_length })
    }
}

/// A directory holding `words{N}.txt` files
#[derive(Debug, Clone)]
pub struct WordDirectory {
    root: PathBuf,
}

impl WordDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the list for one word length
    #[must_use]
    pub fn path_for(&self, word_length: usize) -> PathBuf {
        self.root.join(format!("words{word_length}.txt"))
    }
}

impl WordSource for WordDirectory {
    fn words(&self, word_length: usize) -> Result<Vec<Word>> {
        let path = self.path_for(word_length);
        debug!(path = %path.display(), "loading word list");

        load_from_file(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => GameError::MissingWordList { word_length },
            _ => GameError::Io { path, source },
        })
    }
}

/// In-memory lists grouped by length
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    by_length: FxHashMap<usize, Vec<Word>>,
}

impl WordLists {
    /// Group words by their length
    ///
    /// # Examples
    /// ```
    /// use lingo_engine::core::Word;
    /// use lingo_engine::wordlists::{WordLists, WordSource};
    ///
    /// let lists = WordLists::from_words(["tool", "lingo", "sheep"].map(|w| Word::new(w).unwrap()));
    /// assert_eq!(lists.words(5).unwrap().len(), 2);
    /// assert!(lists.words(6).is_err());
    /// ```
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        for word in words {
            by_length.entry(word.len()).or_default().push(word);
        }
        Self { by_length }
    }
}

impl WordSource for WordLists {
    fn words(&self, word_length: usize) -> Result<Vec<Word>> {
        self.by_length
            .get(&word_length)
            .cloned()
            .ok_or(GameError::MissingWordList { word_length })
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn words(&self, word_length: usize) -> Result<Vec<Word>> {
        (**self).words(word_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn embedded_has_supported_lengths() {
        for length in 4..=7 {
            let words = EmbeddedWords.words(length).unwrap();
            assert!(!words.is_empty());
            assert!(words.iter().all(|w| w.len() == length));
        }
    }

    #[test]
    fn embedded_missing_length() {
        assert!(matches!(
            EmbeddedWords.words(12),
            Err(GameError::MissingWordList { word_length: 12 })
        ));
    }

    #[test]
    fn directory_reads_list_for_length() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words5.txt"), "lingo\nsheep\n").unwrap();

        let source = WordDirectory::new(dir.path());
        let words = source.words(5).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "lingo");
    }

    #[test]
    fn directory_missing_file_is_missing_list() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordDirectory::new(dir.path());

        assert!(matches!(
            source.words(6),
            Err(GameError::MissingWordList { word_length: 6 })
        ));
    }

    #[test]
    fn boxed_source_delegates() {
        let source: Box<dyn WordSource + Send + Sync> = Box::new(EmbeddedWords);
        assert_eq!(source.words(5).unwrap(), EmbeddedWords.words(5).unwrap());
    }

    #[test]
    fn directory_path_for() {
        let source = WordDirectory::new("/srv/lingo");
        assert_eq!(source.path_for(4), PathBuf::from("/srv/lingo/words4.txt"));
        assert_eq!(source.root(), Path::new("/srv/lingo"));
    }
}
