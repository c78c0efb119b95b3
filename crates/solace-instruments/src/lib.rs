//! solace-instruments
//!
//! Standardized questionnaire definitions and the rules applied to them:
//! scoring, severity classification, change detection between
//! administrations, and the severity display tiers used by the portals.
//! Pure data and pure functions; nothing here performs I/O or logs.

pub mod catalog;
pub mod change;
pub mod error;
pub mod instruments;
pub mod presentation;
pub mod scoring;

use solace_core::models::instrument_key::InstrumentKey;
use solace_core::models::severity::SeverityLevel;

use scoring::{Cutoff, Question};

/// Trait implemented by each standardized questionnaire.
pub trait Instrument: Send + Sync {
    /// Stable key for this instrument.
    fn key(&self) -> InstrumentKey;

    /// Human-readable name (e.g., "Patient Health Questionnaire").
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Questions in administration order.
    fn questions(&self) -> &[Question];

    /// Severity bands over the reported score, ascending and contiguous.
    fn cutoffs(&self) -> &[Cutoff];

    /// Smallest score difference between two administrations that counts
    /// as a reliable change.
    fn change_threshold(&self) -> u32;

    /// Convert the raw answer sum into the reported score.
    fn report_score(&self, raw: u32) -> u32 {
        raw
    }

    /// Smallest and largest achievable raw sums.
    fn raw_range(&self) -> (u32, u32) {
        self.questions().iter().fold((0, 0), |(lo, hi), q| {
            (
                lo + u32::from(q.min_value().unwrap_or(0)),
                hi + u32::from(q.max_value().unwrap_or(0)),
            )
        })
    }

    /// Smallest and largest achievable reported scores.
    fn score_range(&self) -> (u32, u32) {
        let (lo, hi) = self.raw_range();
        (self.report_score(lo), self.report_score(hi))
    }

    fn question(&self, id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    /// Band containing `score`, if any.
    fn cutoff_for(&self, score: u32) -> Option<&Cutoff> {
        self.cutoffs().iter().find(|c| c.contains(score))
    }

    /// Canned interpretation sentence for a band this instrument uses.
    fn interpretation(&self, severity: SeverityLevel) -> Option<&str> {
        self.cutoffs()
            .iter()
            .find(|c| c.severity == severity)
            .map(|c| c.interpretation.as_str())
    }
}
