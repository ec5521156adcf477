//! JSON line server
//!
//! Reads one request per line and writes one response per line. Blank lines
//! are skipped; logs go to stderr, so the output stream carries nothing but
//! responses.

use crate::session::SessionManager;
use crate::session::protocol::{Response, handle_line};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Serve requests until the input ends
///
/// Returns the number of requests answered.
///
/// # Errors
///
/// Returns an error only if reading the input or writing a response fails;
/// bad requests are answered, not propagated.
pub fn run_serve<R: BufRead, W: Write>(
    manager: &mut SessionManager,
    mut input: R,
    out: &mut W,
) -> Result<usize> {
    info!("serving requests");
    let mut handled = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(manager, line.trim()),
            Err(e) => {
                warn!(error = %e, "request is not valid UTF-8");
                Response::bad_request(format!("request is not valid UTF-8: {e}"))
            }
        };
        serde_json::to_writer(&mut *out, &response)?;
        writeln!(out)?;
        out.flush()?;
        handled += 1;
    }

    info!(handled, "input closed");
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordLists;
    use serde_json::{Value, json};

    fn manager() -> SessionManager {
        let lists = WordLists::from_words(["lingo"].map(|w| Word::new(w).unwrap()));
        SessionManager::with_seed(lists, 1)
    }

    fn responses(out: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn one_response_per_request() {
        let mut m = manager();
        let mut out = Vec::new();
        let input = "{\"op\":\"reset\"}\n\n   \nnonsense\n";

        let handled = run_serve(&mut m, input.as_bytes(), &mut out).unwrap();

        assert_eq!(handled, 2);
        let replies = responses(&out);
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["ok"], json!(true));
        assert_eq!(replies[1]["error"]["kind"], json!("bad_request"));
    }

    #[test]
    fn invalid_utf8_line_is_answered_and_skipped() {
        let mut m = manager();
        let mut out = Vec::new();
        let input: &[u8] = b"{\"op\":\"reset\",\"x\":\"\xff\"}\n{\"op\":\"reset\"}\n";

        let handled = run_serve(&mut m, input, &mut out).unwrap();

        assert_eq!(handled, 2);
        let replies = responses(&out);
        assert_eq!(replies[0]["ok"], json!(false));
        assert_eq!(replies[0]["error"]["kind"], json!("bad_request"));
        assert_eq!(replies[1]["ok"], json!(true));
        assert_eq!(m.session_count(), 1);
    }

    #[test]
    fn session_carries_across_lines() {
        let mut m = manager();
        let mut out = Vec::new();
        run_serve(&mut m, "{\"op\":\"reset\"}\n".as_bytes(), &mut out).unwrap();
        let id = responses(&out)[0]["result"]["session_id"].clone();

        let mut out = Vec::new();
        let input = format!(
            "{}\n{}\n",
            json!({"op": "guess", "session_id": id, "guess": "lingo"}),
            json!({"op": "guess", "session_id": id, "guess": "lingo"}),
        );
        run_serve(&mut m, input.as_bytes(), &mut out).unwrap();

        let replies = responses(&out);
        assert_eq!(replies[0]["result"]["round_won"], json!(true));
        assert_eq!(replies[1]["error"]["kind"], json!("round_already_over"));
    }
}
