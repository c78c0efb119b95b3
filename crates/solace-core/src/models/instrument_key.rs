use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Stable identity of a supported questionnaire.
///
/// The wire strings ("PHQ-9", "GAD-7", ...) only appear at the serde
/// boundary; everything inside the engine matches on the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InstrumentKey {
    #[serde(rename = "PHQ-9")]
    Phq9,
    #[serde(rename = "GAD-7")]
    Gad7,
    #[serde(rename = "WHODAS-2.0")]
    Whodas2,
    #[serde(rename = "DSM-5-CC")]
    Dsm5Cc,
}

impl InstrumentKey {
    pub const ALL: [InstrumentKey; 4] = [
        InstrumentKey::Phq9,
        InstrumentKey::Gad7,
        InstrumentKey::Whodas2,
        InstrumentKey::Dsm5Cc,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            InstrumentKey::Phq9 => "PHQ-9",
            InstrumentKey::Gad7 => "GAD-7",
            InstrumentKey::Whodas2 => "WHODAS-2.0",
            InstrumentKey::Dsm5Cc => "DSM-5-CC",
        }
    }
}

impl fmt::Display for InstrumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentKey {
    type Err = CoreError;

    /// Exact match against the wire strings, the same set serde accepts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstrumentKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::UnknownInstrument(s.to_string()))
    }
}
