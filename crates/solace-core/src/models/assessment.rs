use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer_set::AnswerSet;
use super::instrument_key::InstrumentKey;
use super::severity::SeverityLevel;

/// One stored administration of an instrument. Persistence is owned by
/// the surrounding application; the engine only reads these back to
/// compare administrations over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub instrument: InstrumentKey,
    pub score: u32,
    pub severity_level: SeverityLevel,
    pub interpretation: String,
    #[serde(default)]
    pub answers: AnswerSet,
    pub administered_on: jiff::civil::Date,
    pub created_at: jiff::Timestamp,
}

impl AssessmentRecord {
    /// Stamp a freshly scored administration with a new id and the
    /// current time.
    pub fn new(
        instrument: InstrumentKey,
        score: u32,
        severity_level: SeverityLevel,
        interpretation: impl Into<String>,
        answers: AnswerSet,
        administered_on: jiff::civil::Date,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            instrument,
            score,
            severity_level,
            interpretation: interpretation.into(),
            answers,
            administered_on,
            created_at: jiff::Timestamp::now(),
        }
    }

    /// Sort key placing administrations in the order they happened.
    pub fn chronology(&self) -> (jiff::civil::Date, jiff::Timestamp) {
        (self.administered_on, self.created_at)
    }
}
