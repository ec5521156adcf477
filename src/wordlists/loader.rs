//! Word list loading utilities
//!
//! Word list files hold one word per line. Blank lines and lines starting
//! with `#` are ignored; entries that are not plain ASCII words are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Parse the contents of a word list file
///
/// # Examples
/// ```
/// use lingo_engine::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("# comment\nLingo\n\nsheep\nno-pe\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "lingo");
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    debug!(entry = trimmed, error = %e, "skipping word list entry");
                    None
                }
            }
        })
        .collect()
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use lingo_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use lingo_engine::wordlists::loader::words_from_slice;
/// use lingo_engine::wordlists::WORDS_5;
///
/// let words = words_from_slice(WORDS_5);
/// assert_eq!(words.len(), WORDS_5.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
