use serde::{Deserialize, Serialize};

/// Transcription result received from the external STT service.
///
/// The core never fetches this itself; the payload arrives pre-decoded from
/// the caller. All fields are tolerated at their degenerate values (empty
/// word list, missing sentiment, zero duration) and produce the documented
/// zero/default scores rather than errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionPayload {
    /// Full utterance transcript
    pub transcript: String,

    /// Utterance-level confidence (0.0 to 1.0)
    pub confidence: f64,

    /// Word-level timings and confidences, in chronological order
    #[serde(default)]
    pub words: Vec<Word>,

    /// Sentiment spans, if the STT service was asked for sentiment
    #[serde(default)]
    pub sentiment_segments: Option<Vec<SentimentSegment>>,

    /// Total audio duration in seconds
    pub duration: f64,
}

/// A single recognized word with timing and confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub text: String,

    /// Start offset in seconds from the beginning of the audio
    pub start: f64,

    /// End offset in seconds
    pub end: f64,

    /// Recognition confidence (0.0 to 1.0)
    pub confidence: f64,
}

/// A labeled span of the transcript with a polarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSegment {
    /// Text covered by this span
    pub text: String,

    /// Index of the first word in the span
    pub start_word: usize,

    /// Index of the last word in the span
    pub end_word: usize,

    /// Polarity label as reported by the STT service
    pub sentiment: String,

    /// Polarity score (-1.0 to 1.0)
    pub sentiment_score: f64,
}

impl TranscriptionPayload {
    /// Whether the payload carries anything worth scoring.
    pub fn has_content(&self) -> bool {
        !self.words.is_empty()
    }
}
