use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown severity level: {0}")]
    UnknownSeverity(String),

    #[error("unknown exercise duration: {0}")]
    UnknownExerciseDuration(String),
}
