//! Lingo - CLI
//!
//! Play Lingo in the terminal, serve sessions over JSON lines, or score and
//! pick words directly.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use lingo_engine::{
    commands::{pick_word, run_play, run_serve, score_guess},
    logging,
    output::print_score_result,
    session::{DEFAULT_WORD_LENGTH, SessionManager},
    wordlists::{EmbeddedWords, WordDirectory, WordSource},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lingo",
    about = "Lingo word game engine: play, serve sessions, score guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding words4.txt, words5.txt, ... (default: built-in lists)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for secret word selection (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds interactively (default)
    Play {
        /// Letters per word
        #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH)]
        length: usize,
    },

    /// Serve sessions as JSON lines on stdin/stdout
    Serve,

    /// Score one guess against a secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a random word
    Pick {
        /// Letters per word
        #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH)]
        length: usize,

        /// Words to skip (repeatable)
        #[arg(short = 'x', long)]
        exclude: Vec<String>,
    },
}

/// Word lists from `--words`, or the ones compiled in
fn word_source(words: Option<PathBuf>) -> Box<dyn WordSource + Send + Sync> {
    match words {
        Some(root) => Box::new(WordDirectory::new(root)),
        None => Box::new(EmbeddedWords),
    }
}

fn session_manager(source: Box<dyn WordSource + Send + Sync>, seed: Option<u64>) -> SessionManager {
    match seed {
        Some(seed) => SessionManager::with_seed(source, seed),
        None => SessionManager::new(source),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let source = word_source(cli.words);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        length: DEFAULT_WORD_LENGTH,
    });

    match command {
        Commands::Play { length } => {
            let mut manager = session_manager(source, cli.seed);
            run_play(&mut manager, length, io::stdin().lock(), &mut io::stdout().lock())?;
            Ok(())
        }
        Commands::Serve => {
            let mut manager = session_manager(source, cli.seed);
            run_serve(&mut manager, io::stdin().lock(), &mut io::stdout().lock())?;
            Ok(())
        }
        Commands::Score {
            secret,
            guess,
            json,
        } => {
            let report = score_guess(&secret, &guess)?;
            if json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                print_score_result(&report);
            }
            Ok(())
        }
        Commands::Pick { length, exclude } => {
            let mut rng = cli
                .seed
                .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            let word = pick_word(&*source, length, &exclude, &mut rng)?;
            println!("{word}");
            Ok(())
        }
    }
}
