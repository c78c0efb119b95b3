pub mod dsm5_cc;
pub mod gad7;
pub mod phq9;
pub mod whodas2;

use solace_core::models::severity::SeverityLevel;

use crate::Instrument;
use crate::scoring::{AnswerOption, Cutoff, Question};

/// The four instruments offered by the portals, in display order.
pub fn builtin() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(phq9::Phq9),
        Box::new(gad7::Gad7),
        Box::new(whodas2::Whodas2),
        Box::new(dsm5_cc::Dsm5Cc),
    ]
}

/// "Over the last two weeks" frequency scale shared by PHQ-9 and GAD-7.
pub(crate) const FREQUENCY_SCALE: [(u8, &str); 4] = [
    (0, "Not at all"),
    (1, "Several days"),
    (2, "More than half the days"),
    (3, "Nearly every day"),
];

pub(crate) fn questions(items: &[(&str, &str)], scale: &[(u8, &str)]) -> Vec<Question> {
    items
        .iter()
        .map(|(id, text)| question(id, text, scale))
        .collect()
}

pub(crate) fn question(id: &str, text: &str, scale: &[(u8, &str)]) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: scale
            .iter()
            .map(|(value, label)| AnswerOption {
                value: *value,
                label: label.to_string(),
            })
            .collect(),
    }
}

pub(crate) fn cutoff(severity: SeverityLevel, min: u32, max: u32, interpretation: &str) -> Cutoff {
    Cutoff {
        severity,
        min,
        max,
        interpretation: interpretation.to_string(),
    }
}
