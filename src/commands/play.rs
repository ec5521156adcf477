//! Interactive play mode
//!
//! Text-based round loop: a secret is drawn, the player types guesses and sees
//! colored tiles after each one. Secrets of finished rounds are not drawn
//! again during the same run.

use crate::error::GameError;
use crate::output::display::{
    print_guess, print_play_banner, print_rejection, print_round_end, print_round_header,
    print_statistics, print_status,
};
use crate::session::{SessionId, SessionManager};
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Totals over one `play` run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayStatistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    /// Attempts needed, per won round
    pub distribution: BTreeMap<usize, usize>,
}

impl PlayStatistics {
    fn record(&mut self, won: bool, attempts: usize) {
        self.rounds_played += 1;
        if won {
            self.rounds_won += 1;
            *self.distribution.entry(attempts).or_insert(0) += 1;
        }
    }

    /// Share of finished rounds that were won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            return 0.0;
        }
        self.rounds_won as f64 / self.rounds_played as f64 * 100.0
    }
}

/// Run the interactive loop until `quit` or end of input
///
/// Commands: `new` abandons the current round and starts another, `status`
/// shows the round so far, `quit` stops. Anything else is a guess.
///
/// # Errors
///
/// Returns an error on I/O failure or when no round can be started (for
/// example, no word list for `word_length`). Rejected guesses are reported
/// to the player and the loop carries on.
pub fn run_play<R: BufRead, W: Write>(
    manager: &mut SessionManager,
    word_length: usize,
    mut input: R,
    out: &mut W,
) -> Result<PlayStatistics> {
    print_play_banner(out)?;

    let mut used: Vec<String> = Vec::new();
    let mut stats = PlayStatistics::default();
    let mut session = start_round(manager, None, word_length, &mut used, out)?;

    loop {
        let prompt = match manager.round(session) {
            Some(round) if !round.is_over() => {
                format!("Guess {}/{}", round.attempts() + 1, round.max_attempts())
            }
            _ => "Command (new/quit)".to_string(),
        };

        let Some(line) = get_user_input(&mut input, out, &prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session = start_round(manager, Some(session), word_length, &mut used, out)?;
            }
            "status" | "s" => print_status(out, &manager.status(session)?)?,
            guess => match manager.guess(session, guess) {
                Ok(outcome) => {
                    let max_attempts = manager.round(session).map_or(0, |r| r.max_attempts());
                    print_guess(out, outcome.attempts, max_attempts, guess, &outcome.score)?;

                    if outcome.round_over {
                        stats.record(outcome.round_won, outcome.attempts);
                        if let Some(secret) = &outcome.current_word {
                            used.push(secret.clone());
                        }
                        print_round_end(out, &outcome)?;
                    }
                }
                Err(e) if e.is_client_error() => print_rejection(out, &e)?,
                Err(e) => return Err(e.into()),
            },
        }
    }

    print_statistics(out, &stats)?;
    Ok(stats)
}

/// Reset the session, starting over on the full pool once every word is used
fn start_round<W: Write>(
    manager: &mut SessionManager,
    session: Option<SessionId>,
    word_length: usize,
    used: &mut Vec<String>,
    out: &mut W,
) -> Result<SessionId> {
    let status = match manager.reset(session, word_length, used.as_slice()) {
        Err(GameError::EmptyPool { .. }) if !used.is_empty() => {
            writeln!(out, "\n♻️  Every word has been played, starting over.")?;
            used.clear();
            manager.reset(session, word_length, used.as_slice())?
        }
        result => result?,
    };

    print_round_header(out, &status)?;
    Ok(status.session_id)
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
