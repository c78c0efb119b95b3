use solace_core::models::answer_set::AnswerSet;
use solace_core::models::instrument_key::InstrumentKey;
use solace_core::models::severity::SeverityLevel;
use solace_instruments::Instrument;
use solace_instruments::catalog::Catalog;
use solace_instruments::error::{InstrumentError, ValidationError};
use solace_instruments::scoring::score;

fn catalog() -> Catalog {
    Catalog::standard().unwrap()
}

fn uniform(instrument: &dyn Instrument, value: u8) -> AnswerSet {
    instrument
        .questions()
        .iter()
        .map(|q| (q.id.clone(), value))
        .collect()
}

/// Answer questions in order with the given values.
fn answers(instrument: &dyn Instrument, values: &[u8]) -> AnswerSet {
    assert_eq!(values.len(), instrument.questions().len());
    instrument
        .questions()
        .iter()
        .zip(values)
        .map(|(q, v)| (q.id.clone(), *v))
        .collect()
}

#[test]
fn every_score_lands_in_exactly_one_band() {
    let catalog = catalog();
    for instrument in catalog.instruments() {
        let (lo, hi) = instrument.score_range();
        for s in lo..=hi {
            let bands = instrument.cutoffs().iter().filter(|c| c.contains(s)).count();
            assert_eq!(bands, 1, "{} score {s} is in {bands} bands", instrument.key());
        }
    }
}

#[test]
fn score_domains_match_instrument_definitions() {
    let catalog = catalog();
    let domain = |key| catalog.get(key).unwrap().score_range();
    assert_eq!(domain(InstrumentKey::Phq9), (0, 27));
    assert_eq!(domain(InstrumentKey::Gad7), (0, 21));
    assert_eq!(domain(InstrumentKey::Whodas2), (0, 100));
    assert_eq!(domain(InstrumentKey::Dsm5Cc), (0, 20));
    assert_eq!(catalog.get(InstrumentKey::Whodas2).unwrap().raw_range(), (12, 60));
}

#[test]
fn question_counts() {
    let catalog = catalog();
    let count = |key| catalog.get(key).unwrap().questions().len();
    assert_eq!(count(InstrumentKey::Phq9), 9);
    assert_eq!(count(InstrumentKey::Gad7), 7);
    assert_eq!(count(InstrumentKey::Whodas2), 12);
    assert_eq!(count(InstrumentKey::Dsm5Cc), 5);
}

#[test]
fn phq9_extremes() {
    let catalog = catalog();
    let phq9 = catalog.get(InstrumentKey::Phq9).unwrap();

    let low = score(phq9, &uniform(phq9, 0)).unwrap();
    assert_eq!(low.score, 0);
    assert_eq!(low.severity_level, SeverityLevel::Minimal);

    let high = score(phq9, &uniform(phq9, 3)).unwrap();
    assert_eq!(high.score, 27);
    assert_eq!(high.raw_score, 27);
    assert_eq!(high.severity_level, SeverityLevel::Severe);
}

#[test]
fn phq9_moderately_severe_band() {
    let catalog = catalog();
    let phq9 = catalog.get(InstrumentKey::Phq9).unwrap();
    let result = score(phq9, &answers(phq9, &[3, 3, 3, 3, 3, 0, 0, 0, 0])).unwrap();
    assert_eq!(result.score, 15);
    assert_eq!(result.severity_level, SeverityLevel::ModeratelySevere);
}

#[test]
fn gad7_severe_starts_at_fifteen() {
    let catalog = catalog();
    let gad7 = catalog.get(InstrumentKey::Gad7).unwrap();

    let fourteen = score(gad7, &answers(gad7, &[3, 3, 3, 3, 2, 0, 0])).unwrap();
    assert_eq!(fourteen.score, 14);
    assert_eq!(fourteen.severity_level, SeverityLevel::Moderate);

    let fifteen = score(gad7, &answers(gad7, &[3, 3, 3, 3, 3, 0, 0])).unwrap();
    assert_eq!(fifteen.score, 15);
    assert_eq!(fifteen.severity_level, SeverityLevel::Severe);
}

#[test]
fn gad7_never_reports_moderately_severe() {
    let catalog = catalog();
    let gad7 = catalog.get(InstrumentKey::Gad7).unwrap();
    assert!(
        gad7.cutoffs()
            .iter()
            .all(|c| c.severity != SeverityLevel::ModeratelySevere)
    );
    assert!(gad7.interpretation(SeverityLevel::ModeratelySevere).is_none());
}

#[test]
fn whodas_rescales_to_percentage() {
    let catalog = catalog();
    let whodas = catalog.get(InstrumentKey::Whodas2).unwrap();

    let none = score(whodas, &uniform(whodas, 1)).unwrap();
    assert_eq!(none.raw_score, 12);
    assert_eq!(none.score, 0);
    assert_eq!(none.severity_level, SeverityLevel::Minimal);

    let extreme = score(whodas, &uniform(whodas, 5)).unwrap();
    assert_eq!(extreme.raw_score, 60);
    assert_eq!(extreme.score, 100);
    assert_eq!(extreme.severity_level, SeverityLevel::Severe);
}

#[test]
fn whodas_rounds_half_up() {
    let catalog = catalog();
    let whodas = catalog.get(InstrumentKey::Whodas2).unwrap();
    // raw 18: 6 / 48 * 100 = 12.5
    assert_eq!(whodas.report_score(18), 13);
    // raw 17: 5 / 48 * 100 = 10.42
    assert_eq!(whodas.report_score(17), 10);
    // raw 36: 24 / 48 * 100 = 50
    assert_eq!(whodas.report_score(36), 50);

    let result = score(whodas, &answers(whodas, &[2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1])).unwrap();
    assert_eq!(result.raw_score, 18);
    assert_eq!(result.score, 13);
    assert_eq!(result.severity_level, SeverityLevel::Mild);
}

#[test]
fn whodas_emotional_question_uses_impact_labels() {
    let catalog = catalog();
    let whodas = catalog.get(InstrumentKey::Whodas2).unwrap();
    let emotional = whodas.question("emotional_impact").unwrap();
    assert_eq!(emotional.options[0].label, "Not at all");
    assert_eq!(emotional.options[4].label, "Extremely");

    let standing = whodas.question("standing").unwrap();
    assert_eq!(standing.options[4].label, "Extreme or cannot do");
}

#[test]
fn dsm5_cc_moderate_starts_at_six() {
    let catalog = catalog();
    let dsm = catalog.get(InstrumentKey::Dsm5Cc).unwrap();

    let five = score(dsm, &answers(dsm, &[2, 2, 1, 0, 0])).unwrap();
    assert_eq!(five.severity_level, SeverityLevel::Mild);

    let six = score(dsm, &answers(dsm, &[2, 2, 2, 0, 0])).unwrap();
    assert_eq!(six.score, 6);
    assert_eq!(six.severity_level, SeverityLevel::Moderate);
}

#[test]
fn interpretation_matches_band() {
    let catalog = catalog();
    let phq9 = catalog.get(InstrumentKey::Phq9).unwrap();
    let result = score(phq9, &uniform(phq9, 3)).unwrap();
    assert_eq!(
        Some(result.interpretation.as_str()),
        phq9.interpretation(SeverityLevel::Severe)
    );
    assert!(result.interpretation.starts_with("Severe depression"));
}

#[test]
fn missing_answer_names_the_question() {
    let catalog = catalog();
    let phq9 = catalog.get(InstrumentKey::Phq9).unwrap();
    let mut answers = uniform(phq9, 1);
    answers = answers
        .iter()
        .filter(|(id, _)| *id != "appetite")
        .map(|(id, v)| (id.to_string(), v))
        .collect();

    let err = score(phq9, &answers).unwrap_err();
    match err {
        InstrumentError::Validation(ValidationError::MissingAnswer { question_id, .. }) => {
            assert_eq!(question_id, "appetite");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_answer_set_is_rejected() {
    let catalog = catalog();
    let err = catalog.score(InstrumentKey::Gad7, &AnswerSet::new()).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::Validation(ValidationError::MissingAnswer { .. })
    ));
}

#[test]
fn out_of_scale_value_is_rejected() {
    let catalog = catalog();
    let whodas = catalog.get(InstrumentKey::Whodas2).unwrap();
    // WHODAS options start at 1; 0 is not an option.
    let mut answers = uniform(whodas, 1);
    answers.insert("washing", 0);

    let err = score(whodas, &answers).unwrap_err();
    match err {
        InstrumentError::Validation(ValidationError::InvalidAnswer {
            question_id,
            value,
            allowed,
            ..
        }) => {
            assert_eq!(question_id, "washing");
            assert_eq!(value, 0);
            assert_eq!(allowed, vec![1, 2, 3, 4, 5]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_question_ids_are_ignored() {
    let catalog = catalog();
    let gad7 = catalog.get(InstrumentKey::Gad7).unwrap();
    let mut answers = uniform(gad7, 1);
    answers.insert("not_a_question", 3);

    let result = score(gad7, &answers).unwrap();
    assert_eq!(result.score, 7);
}

#[test]
fn scoring_is_deterministic() {
    let catalog = catalog();
    let dsm = catalog.get(InstrumentKey::Dsm5Cc).unwrap();
    let answers = answers(dsm, &[4, 3, 2, 1, 0]);

    let first = score(dsm, &answers).unwrap();
    let second = score(dsm, &answers).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn score_result_serializes_camel_case() {
    let catalog = catalog();
    let phq9 = catalog.get(InstrumentKey::Phq9).unwrap();
    let result = score(phq9, &uniform(phq9, 2)).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["instrument"], "PHQ-9");
    assert_eq!(json["score"], 18);
    assert_eq!(json["rawScore"], 18);
    assert_eq!(json["severityLevel"], "moderately-severe");
}
