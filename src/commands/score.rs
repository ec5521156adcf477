//! Score a single guess against a known secret

use crate::core::{Score, Word};
use crate::round::RoundEngine;
use anyhow::{Context, Result};
use serde::Serialize;

/// Outcome of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub secret: String,
    pub guess: String,
    pub score: Score,
    pub won: bool,
}

/// Score `guess` against `secret` exactly as the first guess of a round
///
/// # Errors
///
/// Returns an error if the secret is not a word, or if the guess is rejected
/// by the round (wrong length or non-letters).
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreReport> {
    let secret = Word::new(secret).with_context(|| format!("Invalid secret '{secret}'"))?;
    let mut round = RoundEngine::new(secret.clone());
    let score = round.submit_guess(guess)?;

    Ok(ScoreReport {
        secret: secret.text().to_string(),
        guess: guess.to_ascii_lowercase(),
        score,
        won: round.is_won(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn scores_sheep_epees() {
        let report = score_guess("sheep", "EPEES").unwrap();
        assert_eq!(report.guess, "epees");
        assert_eq!(report.score.to_digits(), vec![0, 1, 2, 2, 1]);
        assert!(!report.won);
    }

    #[test]
    fn exact_guess_wins() {
        let report = score_guess("Lingo", "lingo").unwrap();
        assert!(report.won);
        assert!(report.score.is_perfect());
    }

    #[test]
    fn serializes_score_as_digits() {
        let report = score_guess("lingo", "golin").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], serde_json::json!([1, 1, 1, 1, 1]));
    }

    #[test]
    fn length_mismatch_is_reported() {
        let err = score_guess("lingo", "ling").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::InvalidGuessLength {
                expected: 5,
                actual: 4
            })
        ));
    }

    #[test]
    fn bad_secret_is_reported() {
        let err = score_guess("l1ngo", "lingo").unwrap_err();
        assert!(err.to_string().contains("l1ngo"));
    }
}
