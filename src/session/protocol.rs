//! Line-delimited JSON protocol
//!
//! One request object per line in, one response object per line out. The
//! request and response fields mirror the web API the game was first served
//! over (`reset`, `guess`, `status`), plus `end` to drop a session.

use super::{DEFAULT_WORD_LENGTH, GuessOutcome, RoundStatus, SessionId, SessionManager};
use crate::error::GameError;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// CLIENT -> SERVER
// =============================================================================

/// Requests understood by `serve`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Start a new round, creating a session if no id is given
    Reset {
        #[serde(default = "default_word_length")]
        word_length: usize,
        #[serde(default)]
        old_words: Vec<String>,
        #[serde(default, deserialize_with = "blank_as_none")]
        session_id: Option<SessionId>,
    },

    /// Play a guess in a session's round
    Guess {
        #[serde(default, deserialize_with = "blank_as_none")]
        session_id: Option<SessionId>,
        guess: String,
    },

    /// Inspect a session's round
    Status { session_id: SessionId },

    /// Forget a session
    End { session_id: SessionId },
}

const fn default_word_length() -> usize {
    DEFAULT_WORD_LENGTH
}

/// An empty session id counts as no session id
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<SessionId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(id) if !id.trim().is_empty() => id
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

// =============================================================================
// SERVER -> CLIENT
// =============================================================================

/// Payload of a successful response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Status(RoundStatus),
    Guess(GuessOutcome),
    Ended { session_id: SessionId, ended: bool },
}

/// Error details sent back to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub detail: String,
    /// False for server-side configuration or data problems
    pub client_error: bool,
}

impl From<&GameError> for ErrorBody {
    fn from(err: &GameError) -> Self {
        Self {
            kind: err.kind(),
            detail: err.to_string(),
            client_error: err.is_client_error(),
        }
    }
}

/// One response line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Reply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl Response {
    #[must_use]
    pub const fn success(reply: Reply) -> Self {
        Self {
            ok: true,
            result: Some(reply),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(err: &GameError) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(err.into()),
        }
    }

    /// Response for a line that is not a valid request
    #[must_use]
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(ErrorBody {
                kind: "bad_request",
                detail: detail.into(),
                client_error: true,
            }),
        }
    }
}

impl From<Result<Reply, GameError>> for Response {
    fn from(result: Result<Reply, GameError>) -> Self {
        match result {
            Ok(reply) => Self::success(reply),
            Err(err) => Self::failure(&err),
        }
    }
}

/// Execute one request against the session manager
pub fn handle(manager: &mut SessionManager, request: Request) -> Response {
    let result = match request {
        Request::Reset {
            word_length,
            old_words,
            session_id,
        } => manager
            .reset(session_id, word_length, old_words.as_slice())
            .map(Reply::Status),
        Request::Guess { session_id, guess } => session_id
            .ok_or(GameError::SessionRequired)
            .and_then(|id| manager.guess(id, &guess))
            .map(Reply::Guess),
        Request::Status { session_id } => manager.status(session_id).map(Reply::Status),
        Request::End { session_id } => Ok(Reply::Ended {
            session_id,
            ended: manager.end(session_id),
        }),
    };

    result.into()
}

/// Parse one input line and execute it
///
/// Lines that are not valid requests produce a `bad_request` response rather
/// than an error, so a client can keep going after a typo.
pub fn handle_line(manager: &mut SessionManager, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle(manager, request),
        Err(e) => {
            tracing::warn!(error = %e, "malformed request");
            Response::bad_request(e.to_string())
        }
    }
}
