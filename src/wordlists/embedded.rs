//! Embedded word lists
//!
//! Word lists compiled into the binary at build time from `data/words{N}.txt`.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Look up the embedded list for a word length
#[must_use]
pub fn list_for(word_length: usize) -> Option<&'static [&'static str]> {
    EMBEDDED_LISTS
        .iter()
        .find(|(length, _)| *length == word_length)
        .map(|(_, words)| *words)
}
