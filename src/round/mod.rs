//! Round lifecycle
//!
//! A round moves from `InProgress` to `Won` or `Lost`, and only
//! `RoundEngine::submit_guess` moves it.

mod engine;
mod reveal;

pub use engine::{RoundEngine, RoundState};
pub use reveal::{PLACEHOLDER, RevealState};
