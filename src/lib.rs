//! Lingo engine
//!
//! Scoring and round state for Lingo/Wordle-style word games: score a guess
//! against a secret letter by letter, play rounds with a limited number of
//! attempts, and serve many independent sessions over a JSON line protocol.
//!
//! # Quick Start
//!
//! ```rust
//! use lingo_engine::core::{Score, Word};
//!
//! let secret = Word::new("sheep").unwrap();
//! let guess = Word::new("epees").unwrap();
//!
//! let score = Score::calculate(&guess, &secret);
//! assert_eq!(score.to_digits(), vec![0, 1, 2, 2, 1]);
//! ```

// Core domain types
pub mod core;

pub mod error;

// Word lists and pools
pub mod wordlists;

// Round state machine
pub mod round;

// Sessions and the line protocol
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod logging;
