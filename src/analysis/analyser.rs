use super::metrics::{
    calculate_confidence, calculate_fluency, calculate_pronunciation, calculate_vocabulary_range,
};
use super::sentiment::{summarize_sentiment, SentimentSummary};
use crate::transcription::TranscriptionPayload;
use serde::{Deserialize, Serialize};

/// Scores derived from one transcription payload.
///
/// Immutable once produced; `overall` is always the truncated mean of the
/// four sub-scores it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// Speaking rate and pause analysis (0-100)
    pub fluency: u32,

    /// Recognition-confidence proxy for articulation quality (0-100)
    pub pronunciation: u32,

    /// Word diversity and complexity (0-100)
    pub vocabulary_range: u32,

    /// Sentiment- and phrasing-based confidence (0-100)
    pub confidence: u32,

    /// Truncated mean of the four sub-scores (0-100)
    pub overall: u32,

    /// Transcript the scores were derived from
    pub transcript: String,

    /// Sentiment summary, when the payload carried sentiment segments
    pub sentiment: Option<SentimentSummary>,
}

impl PerformanceResult {
    fn new(
        fluency: u32,
        pronunciation: u32,
        vocabulary_range: u32,
        confidence: u32,
        transcript: String,
        sentiment: Option<SentimentSummary>,
    ) -> Self {
        // Truncating division is the observed contract, not a bug
        let overall = (fluency + pronunciation + vocabulary_range + confidence) / 4;

        Self {
            fluency,
            pronunciation,
            vocabulary_range,
            confidence,
            overall,
            transcript,
            sentiment,
        }
    }

    /// Result for a payload with no usable transcription content.
    pub fn empty() -> Self {
        Self::new(0, 0, 0, 0, String::new(), None)
    }
}

/// Derive the four sub-metrics, the aggregate score, and the sentiment
/// summary from a transcription payload.
///
/// Pure and deterministic. A payload without any recognized words yields the
/// all-zero result rather than an error.
pub fn analyse(payload: &TranscriptionPayload) -> PerformanceResult {
    if !payload.has_content() {
        return PerformanceResult::empty();
    }

    let segments = payload.sentiment_segments.as_deref();

    let pronunciation = calculate_pronunciation(&payload.words, payload.confidence);
    let fluency = calculate_fluency(&payload.words, payload.duration, segments);
    let vocabulary_range = calculate_vocabulary_range(&payload.words);
    let confidence = calculate_confidence(segments, &payload.transcript);

    let sentiment = summarize_sentiment(segments);

    PerformanceResult::new(
        fluency,
        pronunciation,
        vocabulary_range,
        confidence,
        payload.transcript.clone(),
        sentiment,
    )
}
