use solace_core::models::instrument_key::InstrumentKey;
use solace_core::models::severity::SeverityLevel;

use super::{cutoff, question};
use crate::Instrument;
use crate::scoring::{Cutoff, Question};

const DIFFICULTY_SCALE: [(u8, &str); 5] = [
    (1, "None"),
    (2, "Mild"),
    (3, "Moderate"),
    (4, "Severe"),
    (5, "Extreme or cannot do"),
];

const IMPACT_SCALE: [(u8, &str); 5] = [
    (1, "Not at all"),
    (2, "Mildly"),
    (3, "Moderately"),
    (4, "Severely"),
    (5, "Extremely"),
];

/// Raw sum when every item is answered "None".
const RAW_MIN: u32 = 12;
/// Distance between the lowest and highest raw sums (60 − 12).
const RAW_SPAN: u32 = 48;

/// WHODAS 2.0: WHO Disability Assessment Schedule, 12-item version.
/// Items rated 1–5, raw total 12–60, reported as a 0–100 percentage.
pub struct Whodas2;

impl Instrument for Whodas2 {
    fn key(&self) -> InstrumentKey {
        InstrumentKey::Whodas2
    }

    fn name(&self) -> &str {
        "WHO Disability Assessment Schedule 2.0"
    }

    fn description(&self) -> &str {
        "In the past 30 days, how much difficulty did you have in the following activities?"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                ("standing", "Standing for long periods such as 30 minutes"),
                (
                    "household",
                    "Taking care of your household responsibilities",
                ),
                (
                    "learning",
                    "Learning a new task, for example, learning how to get to a new place",
                ),
                (
                    "community",
                    "Joining in community activities (for example, festivities or religious activities) in the same way as anyone else can",
                ),
                (
                    "emotional_impact",
                    "How much have you been emotionally affected by your health problems?",
                ),
                ("concentrating", "Concentrating on doing something for ten minutes"),
                ("walking", "Walking a long distance such as a kilometre"),
                ("washing", "Washing your whole body"),
                ("dressing", "Getting dressed"),
                ("strangers", "Dealing with people you do not know"),
                ("friendships", "Maintaining a friendship"),
                ("daily_work", "Your day-to-day work or school"),
            ];
            items
                .iter()
                .map(|(id, text)| {
                    let scale = if *id == "emotional_impact" {
                        &IMPACT_SCALE
                    } else {
                        &DIFFICULTY_SCALE
                    };
                    question(id, text, scale)
                })
                .collect()
        });
        &QUESTIONS
    }

    fn cutoffs(&self) -> &[Cutoff] {
        static CUTOFFS: std::sync::LazyLock<Vec<Cutoff>> = std::sync::LazyLock::new(|| {
            vec![
                cutoff(
                    SeverityLevel::Minimal,
                    0,
                    10,
                    "No or minimal disability. Day-to-day functioning is largely unaffected.",
                ),
                cutoff(
                    SeverityLevel::Mild,
                    11,
                    25,
                    "Mild disability. Some difficulty with everyday activities.",
                ),
                cutoff(
                    SeverityLevel::Moderate,
                    26,
                    50,
                    "Moderate disability. Noticeable difficulty across several areas of daily life.",
                ),
                cutoff(
                    SeverityLevel::ModeratelySevere,
                    51,
                    75,
                    "Marked disability. Significant limitations in daily functioning and participation.",
                ),
                cutoff(
                    SeverityLevel::Severe,
                    76,
                    100,
                    "Extreme disability. Most daily activities are severely limited or cannot be done.",
                ),
            ]
        });
        &CUTOFFS
    }

    fn change_threshold(&self) -> u32 {
        10
    }

    /// Linear rescale of the raw sum onto 0–100, rounded half up.
    fn report_score(&self, raw: u32) -> u32 {
        let offset = raw.saturating_sub(RAW_MIN).min(RAW_SPAN);
        (offset * 100 + RAW_SPAN / 2) / RAW_SPAN
    }
}
