mod generator;
mod slang;

pub use generator::{generate_feedback, FeedbackResult};
pub use slang::{suggest_slang, SlangSuggestion};
