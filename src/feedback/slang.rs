use serde::{Deserialize, Serialize};

/// A formal phrase and the Aussie idiom a learner could swap it for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlangSuggestion {
    /// The formal phrase as it appeared (or could appear) in the transcript
    pub formal: String,

    /// The local equivalent
    pub local: String,
}

impl SlangSuggestion {
    fn new(formal: &str, local: &str) -> Self {
        Self {
            formal: formal.to_string(),
            local: local.to_string(),
        }
    }
}

/// Formal-to-slang substitution table, checked in order by substring
/// containment against the lower-cased transcript.
const SLANG_MAPPINGS: &[(&str, &str)] = &[
    ("I'm very tired", "I'm knackered"),
    ("afternoon", "arvo"),
    ("avocado", "avo"),
    ("service station", "servo"),
    ("how are you", "how ya going"),
    ("definitely", "definitely"),
    ("breakfast", "brekky"),
    ("barbecue", "barbie"),
    ("chocolate", "choccy"),
    ("sunglasses", "sunnies"),
    ("umbrella", "brolly"),
    ("football", "footy"),
    ("sandwich", "sanga"),
    ("absolutely", "bloody oath"),
    ("no problem", "no worries"),
];

/// Maximum number of suggestions returned per transcript.
const MAX_SUGGESTIONS: usize = 4;

/// Collect slang substitutions for phrases found in the transcript, in table
/// order, capped at four. A transcript matching nothing gets a fixed starter
/// list instead of coming back empty.
pub fn suggest_slang(transcript: &str) -> Vec<SlangSuggestion> {
    let lowercase = transcript.to_lowercase();

    let mut suggestions: Vec<SlangSuggestion> = SLANG_MAPPINGS
        .iter()
        .filter(|(formal, _)| lowercase.contains(&formal.to_lowercase()))
        .map(|(formal, local)| SlangSuggestion::new(formal, local))
        .collect();

    if suggestions.is_empty() {
        suggestions = vec![
            SlangSuggestion::new("I'm feeling tired", "I'm knackered"),
            SlangSuggestion::new("This afternoon", "This arvo"),
            SlangSuggestion::new("How are you?", "How ya going?"),
            SlangSuggestion::new("No problem", "No worries"),
        ];
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
