mod payload;

pub use payload::{SentimentSegment, TranscriptionPayload, Word};
