use serde::{Deserialize, Serialize};
use ts_rs::TS;

use solace_core::models::answer_set::AnswerSet;
use solace_core::models::instrument_key::InstrumentKey;
use solace_core::models::severity::SeverityLevel;

use crate::Instrument;
use crate::error::{InstrumentError, ValidationError};

/// One selectable answer. `value` is the score contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn accepts(&self, value: u8) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn min_value(&self) -> Option<u8> {
        self.options.iter().map(|o| o.value).min()
    }

    pub fn max_value(&self) -> Option<u8> {
        self.options.iter().map(|o| o.value).max()
    }

    pub fn allowed_values(&self) -> Vec<u8> {
        self.options.iter().map(|o| o.value).collect()
    }
}

/// A severity band over the reported score. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cutoff {
    pub severity: SeverityLevel,
    pub min: u32,
    pub max: u32,
    pub interpretation: String,
}

impl Cutoff {
    pub fn contains(&self, score: u32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

/// Outcome of scoring one administration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreResult {
    pub instrument: InstrumentKey,
    /// Reported score; the value classification is based on.
    pub score: u32,
    /// Unscaled sum of the answer values.
    pub raw_score: u32,
    pub interpretation: String,
    pub severity_level: SeverityLevel,
}

/// Score one administration.
///
/// Every question the instrument defines must be answered with one of its
/// option values. Answers for ids the instrument does not define are
/// ignored.
pub fn score(
    instrument: &dyn Instrument,
    answers: &AnswerSet,
) -> Result<ScoreResult, InstrumentError> {
    let key = instrument.key();

    let mut raw_score = 0u32;
    for question in instrument.questions() {
        let value = answers
            .get(&question.id)
            .ok_or_else(|| ValidationError::MissingAnswer {
                instrument: key,
                question_id: question.id.clone(),
            })?;

        if !question.accepts(value) {
            return Err(ValidationError::InvalidAnswer {
                instrument: key,
                question_id: question.id.clone(),
                value,
                allowed: question.allowed_values(),
            }
            .into());
        }

        raw_score += u32::from(value);
    }

    let score = instrument.report_score(raw_score);
    let cutoff = instrument
        .cutoff_for(score)
        .ok_or_else(|| InstrumentError::InvalidDefinition {
            instrument: key,
            reason: format!("score {score} falls outside every cutoff band"),
        })?;

    Ok(ScoreResult {
        instrument: key,
        score,
        raw_score,
        interpretation: cutoff.interpretation.clone(),
        severity_level: cutoff.severity,
    })
}

/// Check that an instrument definition can be scored: questions exist and
/// have unique ids, and the cutoffs cover the reported score range in
/// ascending order with no gap or overlap.
pub fn validate_definition(instrument: &dyn Instrument) -> Result<(), InstrumentError> {
    let key = instrument.key();
    let invalid = |reason: String| InstrumentError::InvalidDefinition {
        instrument: key,
        reason,
    };

    let questions = instrument.questions();
    if questions.is_empty() {
        return Err(invalid("no questions defined".to_string()));
    }
    for (i, question) in questions.iter().enumerate() {
        if question.options.is_empty() {
            return Err(invalid(format!("question '{}' has no options", question.id)));
        }
        if questions[..i].iter().any(|q| q.id == question.id) {
            return Err(invalid(format!("duplicate question id '{}'", question.id)));
        }
    }

    let (lo, hi) = instrument.score_range();
    let cutoffs = instrument.cutoffs();
    let (Some(first), Some(last)) = (cutoffs.first(), cutoffs.last()) else {
        return Err(invalid("no cutoffs defined".to_string()));
    };
    if first.min != lo {
        return Err(invalid(format!(
            "lowest band starts at {} but the minimum score is {lo}",
            first.min
        )));
    }
    if last.max != hi {
        return Err(invalid(format!(
            "highest band ends at {} but the maximum score is {hi}",
            last.max
        )));
    }
    for cutoff in cutoffs {
        if cutoff.min > cutoff.max {
            return Err(invalid(format!("{} band is empty", cutoff.severity)));
        }
    }
    for pair in cutoffs.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.severity <= prev.severity {
            return Err(invalid(format!(
                "{} band follows {} band",
                next.severity, prev.severity
            )));
        }
        if prev.max.checked_add(1) != Some(next.min) {
            return Err(invalid(format!(
                "{} band ends at {} but {} band starts at {}",
                prev.severity, prev.max, next.severity, next.min
            )));
        }
    }

    Ok(())
}
