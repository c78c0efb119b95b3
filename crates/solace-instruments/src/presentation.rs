//! Severity display tiers for the dashboards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use solace_core::models::severity::SeverityLevel;

use crate::error::ValidationError;

/// Display tag attached to a severity badge. Serializes as the CSS class
/// the portals style (`tier-minimal`, `tier-elevated`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TierLabel {
    #[serde(rename = "tier-minimal")]
    Minimal,
    #[serde(rename = "tier-mild")]
    Mild,
    #[serde(rename = "tier-moderate")]
    Moderate,
    #[serde(rename = "tier-elevated")]
    Elevated,
    #[serde(rename = "tier-severe")]
    Severe,
}

impl TierLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            TierLabel::Minimal => "tier-minimal",
            TierLabel::Mild => "tier-mild",
            TierLabel::Moderate => "tier-moderate",
            TierLabel::Elevated => "tier-elevated",
            TierLabel::Severe => "tier-severe",
        }
    }
}

impl fmt::Display for TierLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const fn display_tier(severity: SeverityLevel) -> TierLabel {
    match severity {
        SeverityLevel::Minimal => TierLabel::Minimal,
        SeverityLevel::Mild => TierLabel::Mild,
        SeverityLevel::Moderate => TierLabel::Moderate,
        SeverityLevel::ModeratelySevere => TierLabel::Elevated,
        SeverityLevel::Severe => TierLabel::Severe,
    }
}

/// Tier for a severity level received as text. Severity strings are
/// always produced by the scorer, so anything unrecognized is an error.
pub fn display_tier_str(severity: &str) -> Result<TierLabel, ValidationError> {
    SeverityLevel::from_str(severity)
        .map(display_tier)
        .map_err(|_| ValidationError::UnknownSeverity(severity.to_string()))
}
