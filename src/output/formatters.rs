//! Formatting utilities for terminal output

use crate::core::{LetterScore, Score};
use crate::round::RevealState;
use colored::{ColoredString, Colorize};

/// One guess letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, score: LetterScore) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match score {
        LetterScore::CorrectPosition => tile.black().on_green().bold(),
        LetterScore::WrongPosition => tile.black().on_yellow().bold(),
        LetterScore::Absent => tile.white().on_bright_black(),
    }
}

/// A scored guess as a row of colored tiles
///
/// Extra letters on either side (which a scored guess never has) are ignored.
#[must_use]
pub fn guess_tiles(guess: &str, score: &Score) -> String {
    guess
        .chars()
        .zip(score.iter())
        .map(|(letter, letter_score)| letter_tile(letter, letter_score).to_string())
        .collect()
}

/// Reveal state spaced out for reading, e.g. `L _ _ _ O`
#[must_use]
pub fn reveal_line(reveal: &RevealState) -> String {
    reveal
        .to_string()
        .to_ascii_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Attempts used so far, one pip per attempt
#[must_use]
pub fn attempts_bar(used: usize, max: usize) -> String {
    create_progress_bar(used, max, max)
}
