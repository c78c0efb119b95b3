use solace_core::models::wellness::{ExerciseDuration, WellnessEntry};
use solace_wellness::chart::chart_series;
use solace_wellness::dimension::Dimension;
use solace_wellness::error::WellnessError;

fn entry(month: i8, day: i8, water: u8) -> WellnessEntry {
    WellnessEntry {
        date: jiff::civil::date(2026, month, day),
        water_intake: water,
        sunlight_exposure: 1,
        healthy_meals: 2,
        sleep_hours: 8,
        social_interactions: 3,
        exercise_duration: ExerciseDuration::Under30,
        task_notes: "notes".to_string(),
        remarks: String::new(),
    }
}

#[test]
fn takes_most_recent_in_ascending_order() {
    // Stored newest-first, the way history queries return them.
    let entries = vec![
        entry(10, 5, 5),
        entry(10, 9, 9),
        entry(10, 1, 1),
        entry(10, 7, 7),
    ];

    let series = chart_series(&entries, 3).unwrap();
    let water: Vec<u8> = series.iter().map(|p| p.water_intake).collect();
    assert_eq!(water, vec![5, 7, 9]);
}

#[test]
fn limit_larger_than_input_returns_everything() {
    let entries = vec![entry(10, 2, 2), entry(10, 1, 1)];
    let series = chart_series(&entries, 30).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].date, jiff::civil::date(2026, 10, 1));
}

#[test]
fn zero_limit_or_empty_input_is_empty() {
    assert!(chart_series(&[entry(10, 1, 1)], 0).unwrap().is_empty());
    assert!(chart_series(&[], 7).unwrap().is_empty());
}

#[test]
fn points_carry_display_label() {
    let series = chart_series(&[entry(10, 4, 6)], 7).unwrap();
    assert_eq!(series[0].label, "Oct 04");
    assert_eq!(series[0].sleep_hours, 8);
}

#[test]
fn repeated_calls_are_identical() {
    let entries = vec![entry(9, 30, 3), entry(10, 1, 4)];
    assert_eq!(
        chart_series(&entries, 2).unwrap(),
        chart_series(&entries, 2).unwrap()
    );
}

#[test]
fn out_of_range_rating_is_rejected() {
    let entries = vec![entry(10, 1, 200), entry(10, 2, 3)];
    assert_eq!(
        chart_series(&entries, 7).unwrap_err(),
        WellnessError::RatingOutOfRange {
            dimension: Dimension::WaterIntake,
            value: 200,
            date: jiff::civil::date(2026, 10, 1),
        }
    );
}

#[test]
fn out_of_range_rating_outside_window_is_rejected() {
    // The bad entry is older than the charted window.
    let entries = vec![entry(9, 1, 11), entry(10, 2, 3)];
    assert!(chart_series(&entries, 1).is_err());
}
