//! Registry of the instruments a deployment offers.
//!
//! Built once at startup and shared read-only (`Catalog` is `Send + Sync`).
//! Tests can build a catalog from fixture instruments instead of the
//! built-in set.

use std::str::FromStr;

use solace_core::models::answer_set::AnswerSet;
use solace_core::models::instrument_key::InstrumentKey;

use crate::Instrument;
use crate::change::{self, ChangeResult};
use crate::error::InstrumentError;
use crate::instruments;
use crate::scoring::{self, ScoreResult};

pub struct Catalog {
    instruments: Vec<Box<dyn Instrument>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate keys and any definition that
    /// fails [`scoring::validate_definition`].
    pub fn new(instruments: Vec<Box<dyn Instrument>>) -> Result<Self, InstrumentError> {
        for (i, instrument) in instruments.iter().enumerate() {
            scoring::validate_definition(instrument.as_ref())?;
            if instruments[..i].iter().any(|other| other.key() == instrument.key()) {
                return Err(InstrumentError::InvalidDefinition {
                    instrument: instrument.key(),
                    reason: "instrument registered twice".to_string(),
                });
            }
        }
        Ok(Self { instruments })
    }

    /// PHQ-9, GAD-7, WHODAS-2.0 and DSM-5-CC.
    pub fn standard() -> Result<Self, InstrumentError> {
        Self::new(instruments::builtin())
    }

    pub fn instruments(&self) -> impl Iterator<Item = &dyn Instrument> {
        self.instruments.iter().map(|i| i.as_ref())
    }

    pub fn get(&self, key: InstrumentKey) -> Result<&dyn Instrument, InstrumentError> {
        self.instruments()
            .find(|i| i.key() == key)
            .ok_or_else(|| InstrumentError::NotFound(key.to_string()))
    }

    /// Look up by wire string (e.g. "GAD-7").
    pub fn get_str(&self, key: &str) -> Result<&dyn Instrument, InstrumentError> {
        let key =
            InstrumentKey::from_str(key).map_err(|_| InstrumentError::NotFound(key.to_string()))?;
        self.get(key)
    }

    pub fn score(
        &self,
        key: InstrumentKey,
        answers: &AnswerSet,
    ) -> Result<ScoreResult, InstrumentError> {
        scoring::score(self.get(key)?, answers)
    }

    pub fn detect_change(
        &self,
        key: InstrumentKey,
        previous: u32,
        current: u32,
    ) -> Result<ChangeResult, InstrumentError> {
        change::detect_change(self.get(key)?, previous, current)
    }
}
