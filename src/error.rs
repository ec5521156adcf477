//! Error types for rounds, pools and sessions

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while starting or playing a round
///
/// All variants are recoverable: they describe a request the caller can
/// correct (or a configuration problem to fix) and never poison the state of
/// an existing round.
#[derive(Debug, Error)]
pub enum GameError {
    /// The guess does not have the round's word length
    #[error("Guess must be {expected} letters long, got {actual}")]
    InvalidGuessLength { expected: usize, actual: usize },

    /// The guess contains something other than ASCII letters
    #[error("Guess '{guess}' must contain only letters a-z")]
    InvalidCharacters { guess: String },

    /// A round was requested with a word length of zero
    #[error("Word length must be at least 1")]
    InvalidWordLength,

    /// No eligible word is left to start a round with
    #[error("No unused {word_length}-letter words left to choose from")]
    EmptyPool { word_length: usize },

    /// A guess arrived after the round had finished
    #[error("Round is over. Please reset to start a new round.")]
    RoundAlreadyOver,

    /// The session has no round to operate on
    #[error("No active game for this session. Please reset first.")]
    NoActiveRound,

    /// A request that needs a session id arrived without one
    #[error("Session ID is required.")]
    SessionRequired,

    /// The word source has no list for the requested length
    #[error("No word list available for {word_length}-letter words")]
    MissingWordList { word_length: usize },

    /// Reading a word list failed
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GameError {
    /// Stable machine-readable name for the error
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidGuessLength { .. } => "invalid_guess_length",
            Self::InvalidCharacters { .. } => "invalid_characters",
            Self::InvalidWordLength => "invalid_word_length",
            Self::EmptyPool { .. } => "empty_pool",
            Self::RoundAlreadyOver => "round_already_over",
            Self::NoActiveRound => "no_active_round",
            Self::SessionRequired => "session_required",
            Self::MissingWordList { .. } => "missing_word_list",
            Self::Io { .. } => "io",
        }
    }

    /// True when the caller can fix the request and retry
    ///
    /// The rest are configuration or data problems on the serving side
    /// (what an HTTP front end would answer with a 500).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuessLength { .. }
                | Self::InvalidCharacters { .. }
                | Self::InvalidWordLength
                | Self::RoundAlreadyOver
                | Self::NoActiveRound
                | Self::SessionRequired
        )
    }
}

/// Result alias used throughout the library
pub type Result<T, E = GameError> = std::result::Result<T, E>;
