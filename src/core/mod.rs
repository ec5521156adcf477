//! Core domain types for Lingo
//!
//! Words and the per-letter scoring of a guess against a secret. Everything
//! here is pure: no randomness, no I/O, no shared state.

mod score;
mod word;

pub use score::{LetterScore, Score};
pub use word::{Word, WordError};
