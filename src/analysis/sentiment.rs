use crate::transcription::SentimentSegment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall polarity label derived from the averaged segment scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        write!(f, "{}", label)
    }
}

/// Reduction of the per-span sentiment data to a single label and average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Overall polarity of the utterance
    pub label: SentimentLabel,

    /// Mean of all segment scores (-1.0 to 1.0)
    pub average_score: f64,

    /// The segments the summary was derived from
    pub segments: Vec<SentimentSegment>,
}

/// Reduce sentiment segments to an overall label and average score.
///
/// Positive above 0.1, negative below -0.1, neutral in between. Absent or
/// empty segments produce no summary.
pub fn summarize_sentiment(segments: Option<&[SentimentSegment]>) -> Option<SentimentSummary> {
    let segments = segments.filter(|s| !s.is_empty())?;

    let average_score =
        segments.iter().map(|s| s.sentiment_score).sum::<f64>() / segments.len() as f64;

    let label = if average_score > 0.1 {
        SentimentLabel::Positive
    } else if average_score < -0.1 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    Some(SentimentSummary {
        label,
        average_score,
        segments: segments.to_vec(),
    })
}
