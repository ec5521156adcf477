// End-to-end tests through the public API: word source -> sessions -> rounds,
// and the same flow over the JSON line protocol.

use lingo_engine::commands::run_serve;
use lingo_engine::core::{LetterScore, Word};
use lingo_engine::error::GameError;
use lingo_engine::session::SessionManager;
use lingo_engine::wordlists::{EmbeddedWords, WordDirectory, WordLists};
use serde_json::{Value, json};
use std::fs;
use std::io::Cursor;

const NONE: &[&str] = &[];

fn manager(words: &[&str]) -> SessionManager {
    let lists = WordLists::from_words(words.iter().map(|w| Word::new(*w).unwrap()));
    SessionManager::with_seed(lists, 2024)
}

#[test]
fn lingo_round_from_reset_to_win() {
    let mut m = manager(&["lingo"]);
    let status = m.reset(None, 5, NONE).unwrap();
    assert_eq!(status.max_attempts, 6);
    assert!(!status.round_over);

    let outcome = m.guess(status.session_id, "golin").unwrap();
    assert!(outcome.score.iter().all(|s| s == LetterScore::WrongPosition));
    assert!(!outcome.round_over);
    assert_eq!(outcome.current_word, None);

    let outcome = m.guess(status.session_id, "lingo").unwrap();
    assert!(outcome.score.is_perfect());
    assert!(outcome.round_won);
    assert!(outcome.round_over);
    assert_eq!(outcome.current_word.as_deref(), Some("lingo"));
    assert_eq!(outcome.guess_state, vec!["l", "i", "n", "g", "o"]);
}

#[test]
fn sheep_guess_reveals_only_exact_letters() {
    let mut m = manager(&["sheep"]);
    let id = m.reset(None, 5, NONE).unwrap().session_id;

    let outcome = m.guess(id, "epees").unwrap();
    assert_eq!(outcome.score.to_digits(), vec![0, 1, 2, 2, 1]);
    assert_eq!(outcome.guess_state, vec!["_", "_", "e", "e", "_"]);
}

#[test]
fn four_letter_round_runs_out() {
    let mut m = manager(&["tool"]);
    let id = m.reset(None, 4, NONE).unwrap().session_id;

    for guess in ["able", "acid", "aged", "also"] {
        assert!(!m.guess(id, guess).unwrap().round_over);
    }
    let last = m.guess(id, "area").unwrap();
    assert!(last.round_over);
    assert!(!last.round_won);
    assert_eq!(last.attempts, 5);
    assert_eq!(last.current_word.as_deref(), Some("tool"));

    assert!(matches!(
        m.guess(id, "army"),
        Err(GameError::RoundAlreadyOver)
    ));
    assert_eq!(m.status(id).unwrap().attempts, 5);
}

#[test]
fn sessions_are_independent() {
    let mut m = manager(&["lingo", "sheep", "crane"]);
    let a = m.reset(None, 5, NONE).unwrap().session_id;
    let b = m.reset(None, 5, NONE).unwrap().session_id;
    assert_ne!(a, b);

    m.guess(a, "xxxxx").unwrap();
    assert_eq!(m.status(a).unwrap().attempts, 1);
    assert_eq!(m.status(b).unwrap().attempts, 0);

    assert!(m.end(a));
    assert!(matches!(m.guess(a, "lingo"), Err(GameError::NoActiveRound)));
    assert!(m.status(b).is_ok());
}

#[test]
fn excluding_the_whole_pool_fails() {
    let mut m = manager(&["lingo", "sheep"]);
    assert!(matches!(
        m.reset(None, 5, &["lingo", "sheep"]),
        Err(GameError::EmptyPool { word_length: 5 })
    ));
    assert_eq!(m.session_count(), 0);
}

#[test]
fn embedded_lists_cover_four_to_seven_letters() {
    let mut m = SessionManager::with_seed(EmbeddedWords, 1);
    for length in 4..=7 {
        let status = m.reset(None, length, NONE).unwrap();
        assert_eq!(status.word_length, length);
        assert_eq!(status.max_attempts, length + 1);
    }
}

#[test]
fn word_directory_feeds_sessions() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("words6.txt"), "# six\nPLANET\n\nplanet\n").unwrap();

    let mut m = SessionManager::with_seed(WordDirectory::new(dir.path()), 3);
    let id = m.reset(None, 6, NONE).unwrap().session_id;
    assert!(m.guess(id, "planet").unwrap().round_won);

    assert!(matches!(
        m.reset(None, 5, NONE),
        Err(GameError::MissingWordList { word_length: 5 })
    ));
}

#[test]
fn serve_plays_a_whole_round() {
    let mut m = manager(&["lingo"]);

    let mut out = Vec::new();
    run_serve(&mut m, Cursor::new("{\"op\":\"reset\"}\n"), &mut out).unwrap();
    let reset: Value = serde_json::from_slice(&out).unwrap();
    let id = reset["result"]["session_id"].clone();

    let requests = [
        json!({"op": "guess", "session_id": id, "guess": "ling"}),
        json!({"op": "guess", "session_id": id, "guess": "golin"}),
        json!({"op": "status", "session_id": id}),
        json!({"op": "guess", "session_id": id, "guess": "LINGO"}),
        json!({"op": "guess", "session_id": id, "guess": "lingo"}),
        json!({"op": "end", "session_id": id}),
    ]
    .map(|r| r.to_string())
    .join("\n");

    let mut out = Vec::new();
    let handled = run_serve(&mut m, Cursor::new(requests), &mut out).unwrap();
    assert_eq!(handled, 6);

    let replies: Vec<Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(replies[0]["error"]["kind"], json!("invalid_guess_length"));
    assert_eq!(replies[1]["result"]["score"], json!([1, 1, 1, 1, 1]));
    assert_eq!(replies[2]["result"]["attempts"], json!(1));
    assert!(replies[2]["result"].get("current_word").is_none());
    assert_eq!(replies[3]["result"]["round_won"], json!(true));
    assert_eq!(replies[3]["result"]["current_word"], json!("lingo"));
    assert_eq!(replies[4]["error"]["kind"], json!("round_already_over"));
    assert_eq!(replies[5]["result"]["ended"], json!(true));
}
