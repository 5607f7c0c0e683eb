// Integration tests for the performance analysis core
//
// These tests verify the four metric calculators, the sentiment summarizer,
// and the orchestrating analyse() function against known payloads.

use speakmate::{
    analyse, summarize_sentiment, SentimentLabel, SentimentSegment, TranscriptionPayload, Word,
};

fn word(text: &str, start: f64, end: f64, confidence: f64) -> Word {
    Word {
        text: text.to_string(),
        start,
        end,
        confidence,
    }
}

fn segment(score: f64) -> SentimentSegment {
    SentimentSegment {
        text: String::new(),
        start_word: 0,
        end_word: 0,
        sentiment: String::new(),
        sentiment_score: score,
    }
}

/// Words spoken back to back (no pauses) at a given rate, starting at t=0.
fn words_at_rate(count: usize, span_secs: f64) -> Vec<Word> {
    let step = span_secs / count as f64;
    (0..count)
        .map(|i| {
            word(
                "word",
                i as f64 * step,
                (i + 1) as f64 * step,
                0.9,
            )
        })
        .collect()
}

fn scenario_payload() -> TranscriptionPayload {
    TranscriptionPayload {
        transcript: "I think I'm very tired this afternoon".to_string(),
        confidence: 0.9,
        words: vec![
            word("I", 0.0, 0.2, 0.95),
            word("think", 0.2, 0.5, 0.90),
            word("I'm", 0.5, 0.8, 0.92),
            word("very", 0.8, 1.1, 0.88),
            word("tired", 1.1, 1.5, 0.91),
            word("this", 1.5, 1.8, 0.93),
            word("afternoon", 1.8, 2.4, 0.89),
        ],
        sentiment_segments: None,
        duration: 5.0,
    }
}

#[test]
fn test_empty_word_list_yields_all_zero_result() {
    let payload = TranscriptionPayload {
        transcript: "this text never got word timings".to_string(),
        confidence: 0.9,
        words: vec![],
        sentiment_segments: Some(vec![segment(0.5)]),
        duration: 10.0,
    };

    let result = analyse(&payload);

    assert_eq!(result.fluency, 0);
    assert_eq!(result.pronunciation, 0);
    assert_eq!(result.vocabulary_range, 0);
    assert_eq!(result.confidence, 0);
    assert_eq!(result.overall, 0);
    assert_eq!(result.transcript, "");
    assert!(result.sentiment.is_none());
}

#[test]
fn test_all_scores_within_bounds() {
    let payload = scenario_payload();
    let result = analyse(&payload);

    for score in [
        result.fluency,
        result.pronunciation,
        result.vocabulary_range,
        result.confidence,
        result.overall,
    ] {
        assert!(score <= 100, "Score {} exceeds 100", score);
    }
}

#[test]
fn test_overall_is_truncated_mean_of_sub_scores() {
    let result = analyse(&scenario_payload());

    let expected = (result.fluency
        + result.pronunciation
        + result.vocabulary_range
        + result.confidence)
        / 4;
    assert_eq!(result.overall, expected);
}

#[test]
fn test_analyse_is_deterministic() {
    let payload = scenario_payload();
    assert_eq!(analyse(&payload), analyse(&payload));
}

#[test]
fn test_pronunciation_blends_utterance_and_word_confidence() {
    let payload = scenario_payload();
    let result = analyse(&payload);

    let avg_word_confidence: f64 =
        payload.words.iter().map(|w| w.confidence).sum::<f64>() / payload.words.len() as f64;
    let weighted = payload.confidence * 0.7 + avg_word_confidence * 0.3;
    let expected = (weighted * speakmate::analysis::STRICTNESS_MULTIPLIER * 100.0) as u32;

    assert_eq!(result.pronunciation, expected.min(100));
}

#[test]
fn test_fluency_peaks_at_optimal_speaking_rate() {
    // 25 contiguous words over a 10 second span is exactly 150 wpm
    let optimal = speakmate::analysis::calculate_fluency(&words_at_rate(25, 10.0), 12.0, None);
    let slow = speakmate::analysis::calculate_fluency(&words_at_rate(15, 10.0), 12.0, None);
    let fast = speakmate::analysis::calculate_fluency(&words_at_rate(40, 10.0), 12.0, None);

    assert!(optimal > slow, "150 wpm ({}) should beat 90 wpm ({})", optimal, slow);
    assert!(optimal > fast, "150 wpm ({}) should beat 240 wpm ({})", optimal, fast);

    // No pauses, modifier 1.0: base 0.9, strictness 0.85 -> 76
    assert_eq!(optimal, 76);
}

#[test]
fn test_fluency_penalises_long_pauses() {
    // Same rate, but a 2 second gap mid-utterance
    let mut paused = words_at_rate(25, 10.0);
    for w in paused.iter_mut().skip(13) {
        w.start += 2.0;
        w.end += 2.0;
    }

    let smooth = speakmate::analysis::calculate_fluency(&words_at_rate(25, 10.0), 15.0, None);
    let halting = speakmate::analysis::calculate_fluency(&paused, 15.0, None);

    assert!(halting < smooth, "pause ({}) should lower fluency ({})", halting, smooth);
}

#[test]
fn test_fluency_zero_on_degenerate_input() {
    assert_eq!(speakmate::analysis::calculate_fluency(&[], 10.0, None), 0);
    assert_eq!(
        speakmate::analysis::calculate_fluency(&words_at_rate(10, 5.0), 0.0, None),
        0
    );
    // Single word with no extent has no speech span to measure
    let instant = vec![word("hi", 1.0, 1.0, 0.9)];
    assert_eq!(speakmate::analysis::calculate_fluency(&instant, 5.0, None), 0);
}

#[test]
fn test_vocabulary_rewards_diversity_and_complexity() {
    let repetitive = vec![
        word("yes", 0.0, 0.3, 0.9),
        word("yes", 0.3, 0.6, 0.9),
        word("yes", 0.6, 0.9, 0.9),
        word("yes", 0.9, 1.2, 0.9),
    ];
    let varied = vec![
        word("genuinely", 0.0, 0.5, 0.9),
        word("remarkable", 0.5, 1.0, 0.9),
        word("circumstances", 1.0, 1.6, 0.9),
        word("unfolding", 1.6, 2.1, 0.9),
    ];

    let low = speakmate::analysis::calculate_vocabulary_range(&repetitive);
    let high = speakmate::analysis::calculate_vocabulary_range(&varied);

    assert!(high > low, "varied ({}) should beat repetitive ({})", high, low);
}

#[test]
fn test_vocabulary_is_case_insensitive() {
    let mixed = vec![
        word("Hello", 0.0, 0.3, 0.9),
        word("hello", 0.3, 0.6, 0.9),
        word("HELLO", 0.6, 0.9, 0.9),
    ];
    let lower = vec![
        word("hello", 0.0, 0.3, 0.9),
        word("hello", 0.3, 0.6, 0.9),
        word("hello", 0.6, 0.9, 0.9),
    ];

    assert_eq!(
        speakmate::analysis::calculate_vocabulary_range(&mixed),
        speakmate::analysis::calculate_vocabulary_range(&lower)
    );
}

#[test]
fn test_confidence_scenario_phrase_deltas() {
    // "i think" contributes +0.03 and "very" carries an embedded "er" (-0.05),
    // so the boost nets to -0.02 on the 0.5 base
    let score = speakmate::analysis::calculate_confidence(
        None,
        "I think I'm very tired this afternoon",
    );
    assert_eq!(score, 41);

    // Without any indicator phrases the neutral base stands
    let neutral = speakmate::analysis::calculate_confidence(None, "it is a fine day today");
    assert_eq!(neutral, 42);
}

#[test]
fn test_confidence_boosted_by_assertive_phrases() {
    let hesitant = speakmate::analysis::calculate_confidence(None, "i guess maybe it works");
    let assertive =
        speakmate::analysis::calculate_confidence(None, "it definitely and absolutely works");

    assert!(assertive > hesitant);
}

#[test]
fn test_confidence_each_phrase_counts_once() {
    let once = speakmate::analysis::calculate_confidence(None, "definitely yes");
    let thrice =
        speakmate::analysis::calculate_confidence(None, "definitely definitely definitely yes");

    assert_eq!(once, thrice);
}

#[test]
fn test_confidence_weighted_towards_sentiment() {
    let segments = vec![segment(0.8), segment(0.6)];
    let positive = speakmate::analysis::calculate_confidence(Some(&segments), "it was good");

    let segments = vec![segment(-0.8), segment(-0.6)];
    let negative = speakmate::analysis::calculate_confidence(Some(&segments), "it was good");

    assert!(positive > negative);
}

#[test]
fn test_sentiment_label_boundaries() {
    let label = |score: f64| {
        summarize_sentiment(Some(&[segment(score)]))
            .map(|s| s.label)
            .unwrap()
    };

    assert_eq!(label(0.5), SentimentLabel::Positive);
    assert_eq!(label(0.11), SentimentLabel::Positive);
    assert_eq!(label(0.1), SentimentLabel::Neutral);
    assert_eq!(label(0.0), SentimentLabel::Neutral);
    assert_eq!(label(-0.1), SentimentLabel::Neutral);
    assert_eq!(label(-0.11), SentimentLabel::Negative);
    assert_eq!(label(-0.5), SentimentLabel::Negative);
}

#[test]
fn test_sentiment_absent_or_empty_yields_none() {
    assert!(summarize_sentiment(None).is_none());
    assert!(summarize_sentiment(Some(&[])).is_none());
}

#[test]
fn test_sentiment_summary_averages_segments() {
    let segments = vec![segment(0.6), segment(0.2), segment(-0.2)];
    let summary = summarize_sentiment(Some(&segments)).unwrap();

    assert!((summary.average_score - 0.2).abs() < 1e-9);
    assert_eq!(summary.label, SentimentLabel::Positive);
    assert_eq!(summary.segments.len(), 3);
}

#[test]
fn test_payload_tolerates_missing_optional_fields() {
    let json = r#"{
        "transcript": "hello there",
        "confidence": 0.8,
        "duration": 2.0
    }"#;

    let payload: TranscriptionPayload = serde_json::from_str(json).unwrap();
    assert!(payload.words.is_empty());
    assert!(payload.sentiment_segments.is_none());

    // Degenerate payload still analyses without error
    let result = analyse(&payload);
    assert_eq!(result.overall, 0);
}
