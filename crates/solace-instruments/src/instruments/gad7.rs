use solace_core::models::instrument_key::InstrumentKey;
use solace_core::models::severity::SeverityLevel;

use super::{FREQUENCY_SCALE, cutoff, questions};
use crate::Instrument;
use crate::scoring::{Cutoff, Question};

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items rated 0–3. Total 0–21. Four bands only; there is no
/// moderately-severe band and severe starts at 15.
pub struct Gad7;

impl Instrument for Gad7 {
    fn key(&self) -> InstrumentKey {
        InstrumentKey::Gad7
    }

    fn name(&self) -> &str {
        "Generalized Anxiety Disorder Assessment"
    }

    fn description(&self) -> &str {
        "Over the last 2 weeks, how often have you been bothered by the following problems?"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                ("nervous", "Feeling nervous, anxious, or on edge"),
                ("uncontrollable_worry", "Not being able to stop or control worrying"),
                ("excessive_worry", "Worrying too much about different things"),
                ("trouble_relaxing", "Trouble relaxing"),
                ("restless", "Being so restless that it is hard to sit still"),
                ("irritable", "Becoming easily annoyed or irritable"),
                ("afraid", "Feeling afraid, as if something awful might happen"),
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
                    "Minimal anxiety. Symptoms are unlikely to need treatment.",
                ),
                cutoff(
                    SeverityLevel::Mild,
                    5,
                    9,
                    "Mild anxiety. Monitor symptoms and repeat screening at follow-up.",
                ),
                cutoff(
                    SeverityLevel::Moderate,
                    10,
                    14,
                    "Moderate anxiety. Further evaluation and a treatment plan are recommended.",
                ),
                cutoff(
                    SeverityLevel::Severe,
                    15,
                    21,
                    "Severe anxiety. Active treatment and referral to a mental health specialist are recommended.",
                ),
            ]
        });
        &CUTOFFS
    }

    fn change_threshold(&self) -> u32 {
        4
    }
}
