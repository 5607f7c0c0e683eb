mod analyser;
mod metrics;
mod sentiment;

pub use analyser::{analyse, PerformanceResult};
pub use metrics::{
    calculate_confidence, calculate_fluency, calculate_pronunciation, calculate_vocabulary_range,
    STRICTNESS_MULTIPLIER,
};
pub use sentiment::{summarize_sentiment, SentimentLabel, SentimentSummary};
