pub mod analysis;
pub mod config;
pub mod feedback;
pub mod http;
pub mod storage;
pub mod transcription;

pub use analysis::{
    analyse, summarize_sentiment, PerformanceResult, SentimentLabel, SentimentSummary,
};
pub use config::Config;
pub use feedback::{generate_feedback, suggest_slang, FeedbackResult, SlangSuggestion};
pub use http::{create_router, AppState};
pub use storage::{
    average_score, chart_series, ChartDataPoint, JsonFileBackend, MemoryBackend, ResultsBackend,
    ResultsStore, StoredFeedback, StoredMetrics, StoredPerformanceResult, TrendPeriod,
    MAX_STORED_RESULTS,
};
pub use transcription::{SentimentSegment, TranscriptionPayload, Word};
