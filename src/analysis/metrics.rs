use crate::transcription::{SentimentSegment, Word};

/// Fixed factor applied to every raw metric before scaling to a percentage.
/// Deliberately suppresses ceiling scores so a perfect 100 stays rare.
pub const STRICTNESS_MULTIPLIER: f64 = 0.85;

/// Optimal speaking rate in words per minute for clear speech.
const OPTIMAL_WPM: f64 = 150.0;

/// Gaps between adjacent words longer than this count as pauses.
const PAUSE_THRESHOLD_SECS: f64 = 0.5;

/// Confident words/phrases and their confidence boosts, matched by substring
/// containment against the lower-cased transcript.
const CONFIDENCE_INDICATORS: &[(&str, f64)] = &[
    ("definitely", 0.1),
    ("absolutely", 0.1),
    ("certainly", 0.1),
    ("i believe", 0.05),
    ("i think", 0.03),
    ("clearly", 0.08),
    ("obviously", 0.08),
    ("without doubt", 0.1),
    ("no worries", 0.05),
];

/// Hesitation markers and their penalties.
const HESITATION_INDICATORS: &[(&str, f64)] = &[
    ("um", -0.05),
    ("uh", -0.05),
    ("er", -0.05),
    ("maybe", -0.03),
    ("i guess", -0.05),
    ("perhaps", -0.03),
    ("i'm not sure", -0.08),
    ("i don't know", -0.08),
];

/// Apply the strictness factor, scale to 0-100, truncate, clamp.
fn to_score(raw: f64) -> u32 {
    ((raw * STRICTNESS_MULTIPLIER * 100.0) as i32).clamp(0, 100) as u32
}

fn average_sentiment(segments: &[SentimentSegment]) -> f64 {
    segments.iter().map(|s| s.sentiment_score).sum::<f64>() / segments.len() as f64
}

/// Pronunciation score from word-level and utterance-level recognition
/// confidence, weighted 30/70 in favor of the utterance.
pub fn calculate_pronunciation(words: &[Word], utterance_confidence: f64) -> u32 {
    if words.is_empty() {
        return 0;
    }

    let avg_word_confidence =
        words.iter().map(|w| w.confidence).sum::<f64>() / words.len() as f64;

    let weighted = utterance_confidence * 0.7 + avg_word_confidence * 0.3;

    to_score(weighted)
}

/// Fluency score from speaking rate and pause analysis, with a marginal
/// sentiment modifier (at most ~1% swing).
pub fn calculate_fluency(
    words: &[Word],
    total_duration: f64,
    sentiment_segments: Option<&[SentimentSegment]>,
) -> u32 {
    if words.is_empty() || total_duration <= 0.0 {
        return 0;
    }

    // Speech span excludes leading/trailing silence
    let speech_start = words.first().map(|w| w.start).unwrap_or(0.0);
    let speech_end = words.last().map(|w| w.end).unwrap_or(0.0);
    let speech_span = speech_end - speech_start;
    if speech_span <= 0.0 {
        return 0;
    }

    // Symmetric penalty around the optimal rate; zero at 0 or 300 wpm
    let words_per_minute = words.len() as f64 / (speech_span / 60.0);
    let wpm_score = (1.0 - (words_per_minute - OPTIMAL_WPM).abs() / OPTIMAL_WPM).max(0.0);

    let total_pause_time: f64 = words
        .windows(2)
        .map(|pair| pair[1].start - pair[0].end)
        .filter(|gap| *gap > PAUSE_THRESHOLD_SECS)
        .sum();

    let pause_penalty = (total_pause_time / speech_span * 2.0).min(1.0);
    let pause_score = (1.0 - pause_penalty).max(0.0);

    let sentiment_modifier = match sentiment_segments {
        Some(segments) if !segments.is_empty() => 1.0 + average_sentiment(segments) * 0.1,
        _ => 1.0,
    };

    let base = wpm_score * 0.55 + pause_score * 0.35;
    let fluency = base * 0.9 + base * sentiment_modifier * 0.1;

    to_score(fluency)
}

/// Vocabulary range score from word diversity, average word length, and the
/// share of complex (7+ letter) words among the unique words used.
pub fn calculate_vocabulary_range(words: &[Word]) -> u32 {
    if words.is_empty() {
        return 0;
    }

    let unique_words: std::collections::HashSet<String> =
        words.iter().map(|w| w.text.to_lowercase()).collect();

    let diversity_ratio = unique_words.len() as f64 / words.len() as f64;
    let diversity_score = (diversity_ratio * 2.0).min(1.0);

    let mut complex_words = 0usize;
    let mut total_word_length = 0usize;

    for word in &unique_words {
        let letters = word.chars().filter(|c| c.is_alphabetic()).count();
        total_word_length += letters;
        if letters >= 7 {
            complex_words += 1;
        }
    }

    let avg_word_length = total_word_length as f64 / unique_words.len() as f64;
    // Linear over the 3-7 character range
    let length_score = ((avg_word_length - 3.0) / 4.0).min(1.0);
    let complexity_score = complex_words as f64 / unique_words.len() as f64;

    let vocabulary = diversity_score * 0.4 + length_score * 0.3 + complexity_score * 0.3;

    to_score(vocabulary)
}

/// Confidence score, predominantly from sentiment with lexical indicators.
///
/// The only metric whose raw value can go negative (hesitation penalties),
/// hence the floor clamp in `to_score` is load-bearing here.
pub fn calculate_confidence(
    sentiment_segments: Option<&[SentimentSegment]>,
    transcript: &str,
) -> u32 {
    let mut score = 0.5;

    // Sentiment carries 70% of the weight when present
    if let Some(segments) = sentiment_segments {
        if !segments.is_empty() {
            let sentiment_confidence = (average_sentiment(segments) + 1.0) / 2.0;
            score = score * 0.3 + sentiment_confidence * 0.7;
        }
    }

    // Each phrase contributes once, no matter how often it occurs
    let lowercase = transcript.to_lowercase();
    let mut boost = 0.0;

    for (phrase, delta) in CONFIDENCE_INDICATORS.iter().chain(HESITATION_INDICATORS) {
        if lowercase.contains(phrase) {
            boost += delta;
        }
    }

    score = score * 0.7 + (0.5 + boost) * 0.3;

    to_score(score)
}
