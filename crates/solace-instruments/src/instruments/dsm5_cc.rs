use solace_core::models::instrument_key::InstrumentKey;
use solace_core::models::severity::SeverityLevel;

use super::{cutoff, questions};
use crate::Instrument;
use crate::scoring::{Cutoff, Question};

const SEVERITY_SCALE: [(u8, &str); 5] = [
    (0, "None"),
    (1, "Slight"),
    (2, "Mild"),
    (3, "Moderate"),
    (4, "Severe"),
];

/// DSM-5 Cross-Cutting Symptom Measure, abbreviated to five domains.
/// Items rated 0–4. Total 0–20.
pub struct Dsm5Cc;

impl Instrument for Dsm5Cc {
    fn key(&self) -> InstrumentKey {
        InstrumentKey::Dsm5Cc
    }

    fn name(&self) -> &str {
        "DSM-5 Cross-Cutting Symptom Measure"
    }

    fn description(&self) -> &str {
        "During the past 2 weeks, how much (or how often) have you been bothered by the following problems?"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                (
                    "depression",
                    "Little interest or pleasure in doing things, or feeling down, depressed, or hopeless",
                ),
                (
                    "anxiety",
                    "Feeling nervous, anxious, frightened, worried, or on edge",
                ),
                (
                    "repetitive_thoughts",
                    "Unpleasant thoughts, urges, or images repeatedly entering your mind, or feeling driven to perform certain behaviors or mental acts over and over again",
                ),
                (
                    "substance_use",
                    "Drinking at least 4 drinks of alcohol in a single day, or using medicines or drugs on your own without a prescription",
                ),
                (
                    "sleep",
                    "Problems with sleep that affected your sleep quality over all",
                ),
            ];
            questions(&items, &SEVERITY_SCALE)
        });
        &QUESTIONS
    }

    fn cutoffs(&self) -> &[Cutoff] {
        static CUTOFFS: std::sync::LazyLock<Vec<Cutoff>> = std::sync::LazyLock::new(|| {
            vec![
                cutoff(
                    SeverityLevel::Minimal,
                    0,
                    2,
                    "Minimal symptoms across the screened domains.",
                ),
                cutoff(
                    SeverityLevel::Mild,
                    3,
                    5,
                    "Mild symptoms. Continue to monitor the affected domains.",
                ),
                cutoff(
                    SeverityLevel::Moderate,
                    6,
                    10,
                    "Moderate symptoms. A follow-up assessment of the affected domains is recommended.",
                ),
                cutoff(
                    SeverityLevel::ModeratelySevere,
                    11,
                    15,
                    "Moderately severe symptoms across multiple domains. Further clinical evaluation is recommended.",
                ),
                cutoff(
                    SeverityLevel::Severe,
                    16,
                    20,
                    "Severe symptoms. Prompt clinical evaluation is recommended.",
                ),
            ]
        });
        &CUTOFFS
    }

    fn change_threshold(&self) -> u32 {
        3
    }
}
