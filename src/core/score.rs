//! Lingo feedback calculation and representation
//!
//! A score holds one mark per guessed letter:
//! - 0 = Absent (letter not in word, or all its copies already credited)
//! - 1 = `WrongPosition` (letter in word, elsewhere)
//! - 2 = `CorrectPosition` (letter in the right spot)
//!
//! Unlike a fixed five-letter Wordle pattern, a score is as long as the word
//! being played, so it is stored as a vector rather than packed into an
//! integer.

use super::Word;
use serde::{Serialize, Serializer};
use std::fmt;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    Absent = 0,
    WrongPosition = 1,
    CorrectPosition = 2,
}

impl LetterScore {
    /// Numeric encoding used on the wire (2/1/0)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::CorrectPosition => '🟩',
            Self::WrongPosition => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl Serialize for LetterScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.digit())
    }
}

/// Feedback for a whole guess, positionally aligned with its letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Score(Vec<LetterScore>);

impl Score {
    /// Calculate the score when `guess` is played against `secret`
    ///
    /// Handles repeated letters the way Lingo does: a letter is never
    /// credited more times than it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. Count every letter of the secret
    /// 2. First pass: mark exact matches and spend one copy of their letter
    /// 3. Second pass: mark remaining letters that still have an unspent
    ///    copy as wrong-position, spending it; everything else is absent
    ///
    /// Exact matches are settled before any wrong-position mark, so a letter
    /// that is misplaced early in the guess cannot steal the copy owed to the
    /// same letter placed correctly later on.
    ///
    /// # Examples
    /// ```
    /// use lingo_engine::core::{LetterScore, Score, Word};
    ///
    /// let guess = Word::new("epees").unwrap();
    /// let secret = Word::new("sheep").unwrap();
    /// let score = Score::calculate(&guess, &secret);
    ///
    /// assert_eq!(score.to_digits(), vec![0, 1, 2, 2, 1]);
    /// assert_eq!(score.letters()[0], LetterScore::Absent);
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in length
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "guess and secret lengths differ");

        let mut result = vec![LetterScore::Absent; guess.len()];
        let mut remaining = secret.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                result[i] = LetterScore::CorrectPosition;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (mark, &g) in result.iter_mut().zip(guess.letters()) {
            if *mark == LetterScore::Absent
                && let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                *mark = LetterScore::WrongPosition;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position marks
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterScore] {
        &self.0
    }

    /// Iterate over the marks in guess order
    pub fn iter(&self) -> impl Iterator<Item = LetterScore> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is in the correct position
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.iter().all(|s| s == LetterScore::CorrectPosition)
    }

    /// Count the number of correct-position marks
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.iter()
            .filter(|&s| s == LetterScore::CorrectPosition)
            .count()
    }

    /// Count the number of wrong-position marks
    #[must_use]
    pub fn count_wrong_position(&self) -> usize {
        self.iter()
            .filter(|&s| s == LetterScore::WrongPosition)
            .count()
    }

    /// Positions scored as correct
    pub fn correct_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .enumerate()
            .filter(|&(_, s)| s == LetterScore::CorrectPosition)
            .map(|(i, _)| i)
    }

    /// Numeric encoding, one digit per letter
    #[must_use]
    pub fn to_digits(&self) -> Vec<u8> {
        self.iter().map(LetterScore::digit).collect()
    }

    /// Convert the score to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(LetterScore::emoji).collect()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.iter() {
            write!(f, "{}", mark.digit())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterScore::{Absent, CorrectPosition, WrongPosition};
    use super::*;
    use proptest::prelude::*;

    fn score(guess: &str, secret: &str) -> Score {
        Score::calculate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn score_all_absent() {
        let s = score("abcde", "fghij");
        assert_eq!(s.letters(), &[Absent; 5]);
        assert_eq!(s.count_correct(), 0);
        assert_eq!(s.count_wrong_position(), 0);
    }

    #[test]
    fn score_long_repeated_letter_secret() {
        let secret = format!("b{}", "a".repeat(256));
        let guess = format!("{}b", "a".repeat(256));
        let s = score(&guess, &secret);

        assert_eq!(s.len(), 257);
        assert_eq!(s.letters()[0], WrongPosition);
        assert!(s.letters()[1..256].iter().all(|&m| m == CorrectPosition));
        assert_eq!(s.letters()[256], WrongPosition);
    }

    #[test]
    fn score_exact_match_is_perfect() {
        let s = score("lingo", "lingo");
        assert!(s.is_perfect());
        assert_eq!(s.letters(), &[CorrectPosition; 5]);
    }

    #[test]
    fn score_anagram_all_wrong_position() {
        let s = score("golin", "lingo");
        assert_eq!(s.letters(), &[WrongPosition; 5]);
        assert!(!s.is_perfect());
    }

    #[test]
    fn score_repeated_letters_reserve_exact_matches() {
        // SHEEP has two E's, both matched exactly by EPEES at 2 and 3,
        // so the leading E gets nothing
        let s = score("epees", "sheep");
        assert_eq!(
            s.letters(),
            &[Absent, WrongPosition, CorrectPosition, CorrectPosition, WrongPosition]
        );
    }

    #[test]
    fn score_misplaced_copy_before_exact_copy() {
        // Only one O in the secret; the exact O at index 4 wins it
        let s = score("obovo", "lingo");
        assert_eq!(s.letters(), &[Absent, Absent, Absent, Absent, CorrectPosition]);
    }

    #[test]
    fn score_duplicate_letters_complex() {
        // ROBOT vs FLOOR: first O is displaced, second O is exact
        let s = score("robot", "floor");
        assert_eq!(
            s.letters(),
            &[WrongPosition, WrongPosition, Absent, CorrectPosition, Absent]
        );
        assert_eq!(s.count_correct(), 1);
        assert_eq!(s.count_wrong_position(), 2);
    }

    #[test]
    fn score_other_lengths() {
        assert_eq!(score("tool", "loot").to_digits(), vec![1, 2, 2, 1]);
        assert_eq!(score("letters", "settler").to_digits(), vec![1, 2, 2, 2, 1, 1, 1]);
    }

    #[test]
    fn score_correct_positions() {
        let s = score("epees", "sheep");
        assert_eq!(s.correct_positions().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn score_rendering() {
        let s = score("epees", "sheep");
        assert_eq!(s.to_string(), "01221");
        assert_eq!(s.to_emoji(), "⬜🟨🟩🟩🟨");
        assert_eq!(serde_json::to_string(&s).unwrap(), "[0,1,2,2,1]");
    }

    fn word_pair() -> impl Strategy<Value = (String, String)> {
        (1usize..=8).prop_flat_map(|len| {
            let word = proptest::collection::vec(b'a'..=b'f', len)
                .prop_map(|bytes| String::from_utf8(bytes).unwrap());
            (word.clone(), word)
        })
    }

    proptest! {
        #[test]
        fn score_is_deterministic((guess, secret) in word_pair()) {
            prop_assert_eq!(score(&guess, &secret), score(&guess, &secret));
        }

        #[test]
        fn score_never_overcredits_a_letter((guess, secret) in word_pair()) {
            let s = score(&guess, &secret);
            for letter in b'a'..=b'f' {
                let credited = guess
                    .bytes()
                    .zip(s.iter())
                    .filter(|&(g, mark)| g == letter && mark != Absent)
                    .count();
                let available = secret.bytes().filter(|&c| c == letter).count();
                prop_assert!(credited <= available);
            }
        }

        #[test]
        fn score_exact_matches_always_correct((guess, secret) in word_pair()) {
            let s = score(&guess, &secret);
            for (i, (g, c)) in guess.bytes().zip(secret.bytes()).enumerate() {
                prop_assert_eq!(g == c, s.letters()[i] == CorrectPosition);
            }
        }

        #[test]
        fn score_absent_letters_stay_absent((guess, secret) in word_pair()) {
            let s = score(&guess, &secret);
            for (g, mark) in guess.bytes().zip(s.iter()) {
                if !secret.as_bytes().contains(&g) {
                    prop_assert_eq!(mark, Absent);
                }
            }
        }
    }
}
