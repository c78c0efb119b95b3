//! Change detection between two administrations of the same instrument.
//!
//! All supported instruments score higher for more symptoms or disability,
//! so a falling score is an improvement.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use solace_core::models::assessment::AssessmentRecord;
use solace_core::models::instrument_key::InstrumentKey;

use crate::Instrument;
use crate::catalog::Catalog;
use crate::error::{InstrumentError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ChangeDirection {
    Improvement,
    Deterioration,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChangeResult {
    pub is_significant: bool,
    pub direction: ChangeDirection,
    /// `|previous − current|`
    pub magnitude: u32,
}

/// Compare two reported scores. A change is significant when its magnitude
/// reaches the instrument's reliable-change threshold (inclusive).
pub fn detect_change(
    instrument: &dyn Instrument,
    previous: u32,
    current: u32,
) -> Result<ChangeResult, InstrumentError> {
    let (min, max) = instrument.score_range();
    for score in [previous, current] {
        if !(min..=max).contains(&score) {
            return Err(ValidationError::ScoreOutOfRange {
                instrument: instrument.key(),
                score,
                min,
                max,
            }
            .into());
        }
    }

    let direction = match previous.cmp(&current) {
        Ordering::Greater => ChangeDirection::Improvement,
        Ordering::Less => ChangeDirection::Deterioration,
        Ordering::Equal => ChangeDirection::Stable,
    };
    let magnitude = previous.abs_diff(current);

    Ok(ChangeResult {
        is_significant: magnitude >= instrument.change_threshold(),
        direction,
        magnitude,
    })
}

/// Change between two stored administrations, in whichever order they
/// are passed. The earlier one (by administration date, then creation
/// time) is treated as the previous score.
pub fn compare_records(
    catalog: &Catalog,
    a: &AssessmentRecord,
    b: &AssessmentRecord,
) -> Result<ChangeResult, InstrumentError> {
    let (previous, current) = if a.chronology() <= b.chronology() {
        (a, b)
    } else {
        (b, a)
    };

    if previous.instrument != current.instrument {
        return Err(ValidationError::InstrumentMismatch {
            previous: previous.instrument,
            current: current.instrument,
        }
        .into());
    }

    catalog.detect_change(current.instrument, previous.score, current.score)
}

/// Change between the two most recent administrations of `key`. Records
/// of other instruments are skipped. `None` when fewer than two remain.
pub fn latest_change(
    catalog: &Catalog,
    key: InstrumentKey,
    records: &[AssessmentRecord],
) -> Result<Option<ChangeResult>, InstrumentError> {
    let mut matching: Vec<&AssessmentRecord> =
        records.iter().filter(|r| r.instrument == key).collect();
    matching.sort_by_key(|r| std::cmp::Reverse(r.chronology()));

    match matching.as_slice() {
        [current, previous, ..] => compare_records(catalog, previous, current).map(Some),
        _ => Ok(None),
    }
}
