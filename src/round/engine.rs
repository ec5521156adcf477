//! Round state machine
//!
//! One `RoundEngine` is one round: a secret, the guesses made against it and
//! whether the round has been won or has run out of attempts.

use super::RevealState;
use crate::core::{Score, Word};
use crate::error::{GameError, Result};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// State of a single round
///
/// Owned by exactly one session. A new round means a new engine; nothing is
/// carried over from the previous one.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    secret: Word,
    max_attempts: usize,
    guesses: Vec<Word>,
    reveal: RevealState,
    state: RoundState,
}

impl RoundEngine {
    /// Start a round for `secret`
    ///
    /// The word length is the secret's length, and the player gets one more
    /// attempt than there are letters.
    ///
    /// # Examples
    /// ```
    /// use lingo_engine::core::Word;
    /// use lingo_engine::round::{RoundEngine, RoundState};
    ///
    /// let round = RoundEngine::new(Word::new("lingo").unwrap());
    /// assert_eq!(round.word_length(), 5);
    /// assert_eq!(round.max_attempts(), 6);
    /// assert_eq!(round.state(), RoundState::InProgress);
    /// ```
    #[must_use]
    pub fn new(secret: Word) -> Self {
        let word_length = secret.len();
        Self {
            secret,
            max_attempts: word_length + 1,
            guesses: Vec::with_capacity(word_length + 1),
            reveal: RevealState::new(word_length),
            state: RoundState::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    /// Guesses submitted so far
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts - self.attempts()
    }

    /// Guesses in the order they were made, lowercased
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub const fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.state, RoundState::Won)
    }

    /// The secret, once the round is over
    #[must_use]
    pub const fn secret_word(&self) -> Option<&Word> {
        if self.is_over() {
            Some(&self.secret)
        } else {
            None
        }
    }

    /// Play one guess and score it
    ///
    /// Counts the attempt, records the guess, settles win/loss from exact
    /// equality with the secret, then scores letter by letter and confirms
    /// every correct-position letter in the reveal state.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidGuessLength` if the guess is not `word_length`
    ///   characters long
    /// - `GameError::InvalidCharacters` if it holds anything but letters
    /// - `GameError::RoundAlreadyOver` if the round has finished
    ///
    /// A rejected guess leaves the round untouched.
    ///
    /// # Examples
    /// ```
    /// use lingo_engine::core::Word;
    /// use lingo_engine::round::RoundEngine;
    ///
    /// let mut round = RoundEngine::new(Word::new("lingo").unwrap());
    ///
    /// let score = round.submit_guess("GOLIN").unwrap();
    /// assert_eq!(score.to_digits(), vec![1, 1, 1, 1, 1]);
    /// assert!(!round.is_over());
    ///
    /// let score = round.submit_guess("lingo").unwrap();
    /// assert!(score.is_perfect());
    /// assert!(round.is_won());
    /// assert_eq!(round.secret_word().unwrap().text(), "lingo");
    /// ```
    pub fn submit_guess(&mut self, guess: &str) -> Result<Score> {
        let actual = guess.chars().count();
        if actual != self.word_length() {
            return Err(GameError::InvalidGuessLength {
                expected: self.word_length(),
                actual,
            });
        }

        if self.is_over() {
            return Err(GameError::RoundAlreadyOver);
        }

        let guess = Word::new(guess).map_err(|_| GameError::InvalidCharacters {
            guess: guess.to_string(),
        })?;

        let won = guess == self.secret;
        let score = Score::calculate(&guess, &self.secret);
        self.guesses.push(guess);

        self.state = if won {
            RoundState::Won
        } else if self.guesses.len() >= self.max_attempts {
            RoundState::Lost
        } else {
            RoundState::InProgress
        };

        for position in score.correct_positions() {
            self.reveal.confirm(position, self.secret.letter_at(position));
        }

        Ok(score)
    }
}
