//! Session boundary
//!
//! Maps opaque session ids to the round each session is playing. This is the
//! layer that creates rounds on reset, looks them up for guesses and status,
//! and refuses guesses for missing or finished rounds before the engine ever
//! sees them.

pub mod protocol;

use crate::core::Score;
use crate::error::{GameError, Result};
use crate::round::RoundEngine;
use crate::wordlists::{WordPool, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Opaque identifier handed to clients
pub type SessionId = Uuid;

/// Word length used when a client does not ask for one
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Public view of a round; never contains the secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundStatus {
    pub session_id: SessionId,
    pub word_length: usize,
    pub attempts: usize,
    pub max_attempts: usize,
    pub guesses: Vec<String>,
    pub guess_state: Vec<String>,
    pub round_over: bool,
    pub round_won: bool,
}

impl RoundStatus {
    fn new(session_id: SessionId, round: &RoundEngine) -> Self {
        Self {
            session_id,
            word_length: round.word_length(),
            attempts: round.attempts(),
            max_attempts: round.max_attempts(),
            guesses: round.guesses().iter().map(|g| g.text().to_string()).collect(),
            guess_state: round.reveal().to_strings(),
            round_over: round.is_over(),
            round_won: round.is_won(),
        }
    }
}

/// Result of one accepted guess
///
/// `current_word` is filled in only when this guess ended the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub session_id: SessionId,
    pub score: Score,
    pub attempts: usize,
    pub round_over: bool,
    pub round_won: bool,
    pub guess_state: Vec<String>,
    pub current_word: Option<String>,
}

/// Owns every session's round and the word pools they draw from
///
/// Pools are loaded on first use of a word length and shared by all sessions
/// playing that length. Methods that touch a round take `&mut self`, so a
/// round is only ever mutated by one caller at a time.
pub struct SessionManager {
    source: Box<dyn WordSource + Send + Sync>,
    pools: FxHashMap<usize, Arc<WordPool>>,
    sessions: FxHashMap<SessionId, RoundEngine>,
    rng: StdRng,
}

impl SessionManager {
    /// Manager drawing secrets with an OS-seeded random source
    pub fn new(source: impl WordSource + Send + Sync + 'static) -> Self {
        Self::with_rng(source, StdRng::from_os_rng())
    }

    /// Manager with a reproducible sequence of secrets
    pub fn with_seed(source: impl WordSource + Send + Sync + 'static, seed: u64) -> Self {
        Self::with_rng(source, StdRng::seed_from_u64(seed))
    }

    fn with_rng(source: impl WordSource + Send + Sync + 'static, rng: StdRng) -> Self {
        Self {
            source: Box::new(source),
            pools: FxHashMap::default(),
            sessions: FxHashMap::default(),
            rng,
        }
    }

    /// Shared pool for a word length, loading it on first request
    ///
    /// # Errors
    ///
    /// Returns the word source's error when it has no list for that length.
    pub fn pool(&mut self, word_length: usize) -> Result<Arc<WordPool>> {
        if let Some(pool) = self.pools.get(&word_length) {
            return Ok(Arc::clone(pool));
        }

        let pool = Arc::new(WordPool::from_source(self.source.as_ref(), word_length)?);
        self.pools.insert(word_length, Arc::clone(&pool));
        Ok(pool)
    }

    /// Start a fresh round for a session, creating the session if needed
    ///
    /// Any round the session was playing is replaced. Words in `excluding`
    /// are never picked as the new secret.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidWordLength` for a word length of zero
    /// - `GameError::MissingWordList` (or `Io`) when no list exists for the length
    /// - `GameError::EmptyPool` when every candidate is excluded
    ///
    /// On error the session keeps whatever round it had.
    pub fn reset<S: AsRef<str>>(
        &mut self,
        session: Option<SessionId>,
        word_length: usize,
        excluding: &[S],
    ) -> Result<RoundStatus> {
        let is_new = session.is_none();
        let session_id = session.unwrap_or_else(Uuid::new_v4);

        let round = self
            .start_round(word_length, excluding)
            .inspect_err(|e| warn!(%session_id, word_length, error = %e, "reset failed"))?;

        info!(
            %session_id,
            word_length,
            new_session = is_new,
            "session reset"
        );

        let status = RoundStatus::new(session_id, &round);
        self.sessions.insert(session_id, round);
        Ok(status)
    }

    fn start_round<S: AsRef<str>>(
        &mut self,
        word_length: usize,
        excluding: &[S],
    ) -> Result<RoundEngine> {
        if word_length == 0 {
            return Err(GameError::InvalidWordLength);
        }

        let pool = self.pool(word_length)?;
        let secret = pool.select_word(excluding, &mut self.rng)?;
        Ok(RoundEngine::new(secret.clone()))
    }

    /// Submit a guess to a session's round
    ///
    /// # Errors
    ///
    /// - `GameError::NoActiveRound` if the session does not exist
    /// - `GameError::RoundAlreadyOver` if its round has finished
    /// - the engine's input errors for malformed guesses
    pub fn guess(&mut self, session_id: SessionId, text: &str) -> Result<GuessOutcome> {
        let Some(round) = self.sessions.get_mut(&session_id) else {
            warn!(%session_id, "guess for unknown session");
            return Err(GameError::NoActiveRound);
        };

        if round.is_over() {
            info!(%session_id, "guess on finished round");
            return Err(GameError::RoundAlreadyOver);
        }

        let attempt = round.attempts() + 1;
        let score = round
            .submit_guess(text)
            .inspect_err(|e| warn!(%session_id, guess = text, error = %e, "guess rejected"))?;

        info!(
            %session_id,
            attempt,
            score = %score,
            round_over = round.is_over(),
            round_won = round.is_won(),
            "guess scored"
        );

        let current_word = round.secret_word().map(|w| w.text().to_string());
        if let Some(secret) = &current_word {
            info!(%session_id, secret = %secret, won = round.is_won(), "round finished");
        }

        Ok(GuessOutcome {
            session_id,
            score,
            attempts: round.attempts(),
            round_over: round.is_over(),
            round_won: round.is_won(),
            guess_state: round.reveal().to_strings(),
            current_word,
        })
    }

    /// Current state of a session's round
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoActiveRound` if the session does not exist.
    pub fn status(&self, session_id: SessionId) -> Result<RoundStatus> {
        debug!(%session_id, "status request");
        self.sessions
            .get(&session_id)
            .map(|round| RoundStatus::new(session_id, round))
            .ok_or_else(|| {
                warn!(%session_id, "status for unknown session");
                GameError::NoActiveRound
            })
    }

    /// Read-only access to a session's round
    #[must_use]
    pub fn round(&self, session_id: SessionId) -> Option<&RoundEngine> {
        self.sessions.get(&session_id)
    }

    /// Drop a session; returns whether it existed
    pub fn end(&mut self, session_id: SessionId) -> bool {
        let existed = self.sessions.remove(&session_id).is_some();
        debug!(%session_id, existed, "session ended");
        existed
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
