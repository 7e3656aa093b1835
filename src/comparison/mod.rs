//! Comparison pipeline.
//!
//! validator -> prompt -> collaborator -> parser -> renderer. Everything
//! here is free of UI concerns and testable headless.

pub mod attributes;
pub mod parser;
pub mod prompt;
pub mod renderer;
pub mod requester;
pub mod validator;

pub use parser::parse_comparison_response;
pub use renderer::{numeric_value, row_winner, spec_rows, summary_cards, summary_winner_label};
pub use requester::ComparisonRequester;
pub use validator::validate_model_name;
