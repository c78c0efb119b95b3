use solace_core::models::instrument_key::InstrumentKey;
use solace_core::models::severity::SeverityLevel;

use super::{FREQUENCY_SCALE, cutoff, questions};
use crate::Instrument;
use crate::scoring::{Cutoff, Question};

/// PHQ-9: Patient Health Questionnaire (depression).
/// 9 items rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn key(&self) -> InstrumentKey {
        InstrumentKey::Phq9
    }

    fn name(&self) -> &str {
        "Patient Health Questionnaire"
    }

    fn description(&self) -> &str {
        "Over the last 2 weeks, how often have you been bothered by any of the following problems?"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                ("little_interest", "Little interest or pleasure in doing things"),
                ("feeling_down", "Feeling down, depressed, or hopeless"),
                (
                    "sleep_trouble",
                    "Trouble falling or staying asleep, or sleeping too much",
                ),
                ("low_energy", "Feeling tired or having little energy"),
                ("appetite", "Poor appetite or overeating"),
                (
                    "self_worth",
                    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                ),
                (
                    "concentration",
                    "Trouble concentrating on things, such as reading the newspaper or watching television",
                ),
                (
                    "psychomotor",
                    "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
                ),
                (
                    "self_harm",
                    "Thoughts that you would be better off dead, or of hurting yourself in some way",
                ),
            ];
            questions(&items, &FREQUENCY_SCALE)
        });
        &QUESTIONS
    }

    fn cutoffs(&self) -> &[Cutoff] {
        static CUTOFFS: std::sync::LazyLock<Vec<Cutoff>> = std::sync::LazyLock::new(|| {
            vec![
                cutoff(
                    SeverityLevel::Minimal,
                    0,
                    4,
                    "Minimal depression. Symptoms are unlikely to need treatment.",
                ),
                cutoff(
                    SeverityLevel::Mild,
                    5,
                    9,
                    "Mild depression. Watchful waiting and repeat screening at follow-up are recommended.",
                ),
                cutoff(
                    SeverityLevel::Moderate,
                    10,
                    14,
                    "Moderate depression. A treatment plan including counseling, follow-up, or medication should be considered.",
                ),
                cutoff(
                    SeverityLevel::ModeratelySevere,
                    15,
                    19,
                    "Moderately severe depression. Active treatment with psychotherapy, medication, or both is recommended.",
                ),
                cutoff(
                    SeverityLevel::Severe,
                    20,
                    27,
                    "Severe depression. Immediate treatment and referral to a mental health specialist are recommended.",
                ),
            ]
        });
        &CUTOFFS
    }

    fn change_threshold(&self) -> u32 {
        5
    }
}
