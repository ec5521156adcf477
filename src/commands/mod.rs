//! Command implementations

pub mod pick;
pub mod play;
pub mod score;
pub mod serve;

pub use pick::pick_word;
pub use play::{PlayStatistics, run_play};
pub use score::{ScoreReport, score_guess};
pub use serve::run_serve;
