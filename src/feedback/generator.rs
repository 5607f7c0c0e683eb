use super::slang::{suggest_slang, SlangSuggestion};
use crate::analysis::PerformanceResult;
use serde::{Deserialize, Serialize};

/// Generated coaching feedback for one performance result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResult {
    /// Narrative assessment of the recording
    pub narrative: String,

    /// Concrete practice suggestions, joined into one sentence list
    pub suggestions: String,

    /// Up to four formal-to-slang substitutions drawn from the transcript
    pub slang_suggestions: Vec<SlangSuggestion>,
}

/// Generate narrative feedback, practice suggestions, and slang
/// substitutions from a performance result. Pure function; identical results
/// produce identical feedback.
pub fn generate_feedback(result: &PerformanceResult) -> FeedbackResult {
    FeedbackResult {
        narrative: generate_narrative(result),
        suggestions: generate_suggestions(result),
        slang_suggestions: suggest_slang(&result.transcript),
    }
}

fn generate_narrative(result: &PerformanceResult) -> String {
    let mut feedback = String::from("Your speech was ");

    if result.overall >= 80 {
        feedback.push_str("excellent - confident, clear, and well-paced");
    } else if result.overall >= 70 {
        feedback.push_str("good overall with room for improvement");
    } else if result.confidence > 60 {
        feedback.push_str("mostly confident but could benefit from more practice");
    } else {
        feedback.push_str("lacking confidence and needs more work on clarity");
    }

    // Call out the weakest metric, but only when it is genuinely weak.
    // Ties resolve in fixed order: fluency, pronunciation, vocabulary,
    // confidence.
    let lowest = result
        .fluency
        .min(result.pronunciation)
        .min(result.vocabulary_range)
        .min(result.confidence);

    if lowest == result.fluency && result.fluency < 70 {
        feedback.push_str(". Work on speaking more smoothly with fewer pauses");
    } else if lowest == result.pronunciation && result.pronunciation < 70 {
        feedback.push_str(". Focus on clearer pronunciation of individual words");
    } else if lowest == result.vocabulary_range && result.vocabulary_range < 70 {
        feedback.push_str(". Try to use a wider range of vocabulary");
    } else if lowest == result.confidence && result.confidence < 70 {
        feedback.push_str(". Work on speaking with more confidence and positivity");
    }

    feedback.push_str(
        ". To sound more like a native Aussie, consider using local slang and expressions \
         that make your speech more natural and relatable.",
    );

    feedback
}

fn generate_suggestions(result: &PerformanceResult) -> String {
    let mut suggestions: Vec<&str> = Vec::new();

    if result.fluency < 70 {
        suggestions.push(
            "Practice speaking without long pauses - try recording yourself and listening back",
        );
        suggestions.push("Work on connecting your thoughts more smoothly");
    }

    if result.pronunciation < 70 {
        suggestions.push("Focus on clearer enunciation of each word");
        suggestions.push("Practice with tongue twisters to improve articulation");
    }

    if result.vocabulary_range < 70 {
        suggestions.push("Try using more varied vocabulary to express your ideas");
        suggestions.push("Read more Australian content to learn local expressions");
    }

    if result.confidence < 70 {
        suggestions.push("Practice speaking with more assertive language");
        suggestions.push("Avoid filler words like 'um' and 'uh' - pause instead");
    }

    if let Some(sentiment) = &result.sentiment {
        if sentiment.average_score < -0.2 {
            suggestions.push("Try to maintain a more positive tone when discussing topics");
            suggestions.push("Consider framing your points in a more optimistic way");
        }
    }

    // All metrics healthy: encourage rather than correct
    if suggestions.is_empty() {
        suggestions.push(
            "Getting straight to the point shows confidence and makes it easier for others \
             to follow",
        );
        suggestions.push(
            "Be mindful of your tone - aim for a relaxed, friendly vibe like you're having \
             a yarn with a mate",
        );
    }

    format!("{}.", suggestions.join(". "))
}
