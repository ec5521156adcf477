//! Word lists for Lingo rounds
//!
//! Provides the embedded lists, file loaders, the `WordSource` abstraction
//! and the `WordPool` that secrets are drawn from.

mod embedded;
pub mod loader;
mod pool;
mod source;

pub use embedded::{EMBEDDED_LISTS, WORDS_4, WORDS_5, WORDS_6, WORDS_7, list_for};
pub use pool::WordPool;
pub use source::{EmbeddedWords, WordDirectory, WordLists, WordSource};
