//! Display functions for command results

use super::formatters::{attempts_bar, guess_tiles};
use crate::commands::{PlayStatistics, ScoreReport};
use crate::core::Score;
use crate::error::GameError;
use crate::session::{GuessOutcome, RoundStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Welcome banner for interactive play
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_play_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "L I N G O".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "\nGuess the secret word. After each guess:")?;
    writeln!(out, "  {} right letter, right place", " A ".black().on_green())?;
    writeln!(out, "  {} right letter, wrong place", " A ".black().on_yellow())?;
    writeln!(out, "  {} not in the word", " A ".white().on_bright_black())?;
    writeln!(out, "\nCommands: 'new' for a new round, 'status', 'quit' to exit")
}

/// Announce a freshly started round
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_round_header<W: Write>(out: &mut W, status: &RoundStatus) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "New round: {} letters, {} attempts",
        status.word_length.to_string().bright_yellow().bold(),
        status.max_attempts.to_string().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(out, "  {}", spaced(&status.guess_state))
}

/// One scored guess as a row of tiles
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_guess<W: Write>(
    out: &mut W,
    attempt: usize,
    max_attempts: usize,
    guess: &str,
    score: &Score,
) -> io::Result<()> {
    writeln!(
        out,
        "  {} {} {}",
        format!("{attempt}.").bright_black(),
        guess_tiles(guess, score),
        attempts_bar(attempt, max_attempts).bright_black()
    )
}

/// Banner for a round that just finished
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_round_end<W: Write>(out: &mut W, outcome: &GuessOutcome) -> io::Result<()> {
    let secret = outcome
        .current_word
        .as_deref()
        .unwrap_or_default()
        .to_uppercase();

    writeln!(out)?;
    if outcome.round_won {
        let verdict = match outcome.attempts {
            1 => "🏆 First try!",
            2 => "⭐ Excellent!",
            3 => "💫 Great!",
            _ => "✅ Solved!",
        };
        writeln!(
            out,
            "{} {} in {} {}",
            verdict.bright_green().bold(),
            secret.bright_yellow().bold(),
            outcome.attempts.to_string().bright_cyan().bold(),
            if outcome.attempts == 1 { "guess" } else { "guesses" }
        )?;
    } else {
        writeln!(
            out,
            "{} The word was {}",
            "❌ Out of attempts.".red().bold(),
            secret.bright_yellow().bold()
        )?;
    }
    writeln!(out, "Type 'new' for another round or 'quit' to exit.")
}

/// The round so far
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_status<W: Write>(out: &mut W, status: &RoundStatus) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Round status:".bright_cyan().bold())?;
    writeln!(out, "   Letters:   {}", spaced(&status.guess_state))?;
    writeln!(
        out,
        "   Attempts:  {}/{} {}",
        status.attempts,
        status.max_attempts,
        attempts_bar(status.attempts, status.max_attempts)
    )?;
    if !status.guesses.is_empty() {
        writeln!(out, "   Guesses:   {}", status.guesses.join(", ").to_uppercase())?;
    }
    if status.round_over {
        let state = if status.round_won { "won".green() } else { "lost".red() };
        writeln!(out, "   Round:     {state}")?;
    }
    Ok(())
}

/// A guess or command the round refused
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_rejection<W: Write>(out: &mut W, err: &GameError) -> io::Result<()> {
    writeln!(out, "{} {err}", "❌".red())
}

/// Totals for an interactive run
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn print_statistics<W: Write>(out: &mut W, stats: &PlayStatistics) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "SESSION RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n   Rounds played:  {}", stats.rounds_played)?;
    writeln!(
        out,
        "   Rounds won:     {} ({})",
        stats.rounds_won,
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    )?;

    if !stats.distribution.is_empty() {
        writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
        let most = stats.distribution.values().copied().max().unwrap_or(1);
        for (attempts, &count) in &stats.distribution {
            let bar_width = count * 30 / most;
            writeln!(
                out,
                "   {attempts}: {}{} {count:3}",
                "█".repeat(bar_width).green(),
                "░".repeat(30 - bar_width).bright_black()
            )?;
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")
}

/// Print the result of scoring one guess
pub fn print_score_result(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        report.secret.to_uppercase().bright_yellow().bold(),
        report.guess.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", guess_tiles(&report.guess, &report.score));
    println!(
        "  {}  ({})",
        report.score.to_emoji(),
        report.score.to_string().bright_black()
    );
    println!(
        "\n  Correct position: {}",
        report.score.count_correct().to_string().green()
    );
    println!(
        "  Wrong position:   {}",
        report.score.count_wrong_position().to_string().yellow()
    );

    if report.won {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

fn spaced(letters: &[String]) -> String {
    letters.join(" ").to_uppercase()
}
