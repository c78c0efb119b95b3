use thiserror::Error;

use solace_core::models::instrument_key::InstrumentKey;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid definition for {instrument}: {reason}")]
    InvalidDefinition {
        instrument: InstrumentKey,
        reason: String,
    },
}

/// Caller supplied input the engine cannot score or compare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{instrument}: missing answer for question '{question_id}'")]
    MissingAnswer {
        instrument: InstrumentKey,
        question_id: String,
    },

    #[error("{instrument}: {value} is not a valid answer for question '{question_id}' (expected one of {allowed:?})")]
    InvalidAnswer {
        instrument: InstrumentKey,
        question_id: String,
        value: u8,
        allowed: Vec<u8>,
    },

    #[error("{instrument}: score {score} is outside [{min}, {max}]")]
    ScoreOutOfRange {
        instrument: InstrumentKey,
        score: u32,
        min: u32,
        max: u32,
    },

    #[error("cannot compare a {previous} administration with a {current} administration")]
    InstrumentMismatch {
        previous: InstrumentKey,
        current: InstrumentKey,
    },

    #[error("unknown severity level: {0}")]
    UnknownSeverity(String),
}
