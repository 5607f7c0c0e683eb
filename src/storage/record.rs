use crate::analysis::PerformanceResult;
use crate::feedback::{FeedbackResult, SlangSuggestion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted result per completed recording session.
///
/// Flat, versionless record; field evolution is additive only. Live
/// sentiment detail is intentionally not persisted - only the scores,
/// overall, and transcript survive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPerformanceResult {
    pub id: Uuid,

    /// When the recording was analysed
    pub date: DateTime<Utc>,

    /// The prompt the learner was responding to
    pub prompt: String,

    pub metrics: StoredMetrics,

    pub feedback: StoredFeedback,

    /// Filename of the associated audio artifact
    pub audio_file_name: String,
}

impl StoredPerformanceResult {
    pub fn new(
        date: DateTime<Utc>,
        prompt: String,
        metrics: &PerformanceResult,
        feedback: &FeedbackResult,
        audio_file_name: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            prompt,
            metrics: StoredMetrics::from(metrics),
            feedback: StoredFeedback::from(feedback),
            audio_file_name,
        }
    }
}

/// Persisted subset of a performance result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredMetrics {
    pub fluency: u32,
    pub pronunciation: u32,
    pub vocabulary_range: u32,
    pub confidence: u32,
    pub overall: u32,
    pub transcript: String,
}

impl From<&PerformanceResult> for StoredMetrics {
    fn from(metrics: &PerformanceResult) -> Self {
        Self {
            fluency: metrics.fluency,
            pronunciation: metrics.pronunciation,
            vocabulary_range: metrics.vocabulary_range,
            confidence: metrics.confidence,
            overall: metrics.overall,
            transcript: metrics.transcript.clone(),
        }
    }
}

/// Persisted feedback, slang suggestions included (the list is already
/// bounded at four entries when generated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFeedback {
    pub narrative: String,
    pub suggestions: String,
    pub slang_suggestions: Vec<SlangSuggestion>,
}

impl From<&FeedbackResult> for StoredFeedback {
    fn from(feedback: &FeedbackResult) -> Self {
        Self {
            narrative: feedback.narrative.clone(),
            suggestions: feedback.suggestions.clone(),
            slang_suggestions: feedback.slang_suggestions.clone(),
        }
    }
}
