//! Terminal output formatting
//!
//! Colored tiles, banners and summaries for the interactive commands.

pub mod display;
pub mod formatters;

pub use display::print_score_result;
