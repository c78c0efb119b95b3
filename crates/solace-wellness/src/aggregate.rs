use serde::{Deserialize, Serialize};
use ts_rs::TS;

use solace_core::models::wellness::{ExerciseDuration, MAX_RATING, WellnessEntry};

use crate::dimension::Dimension;
use crate::error::WellnessError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DimensionAverages {
    pub water_intake: f64,
    pub sunlight_exposure: f64,
    pub healthy_meals: f64,
    pub sleep_hours: f64,
    pub social_interactions: f64,
}

impl DimensionAverages {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::WaterIntake => self.water_intake,
            Dimension::SunlightExposure => self.sunlight_exposure,
            Dimension::HealthyMeals => self.healthy_meals,
            Dimension::SleepHours => self.sleep_hours,
            Dimension::SocialInteractions => self.social_interactions,
        }
    }
}

/// Summary over a window of check-ins. Averages are unrounded; display
/// precision is the presentation layer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WellnessStats {
    pub averages: DimensionAverages,
    pub most_common_exercise: ExerciseDuration,
    pub entry_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseCount {
    pub duration: ExerciseDuration,
    pub count: usize,
}

/// Reject any entry with a rating outside `0..=10`.
pub fn validate(entries: &[WellnessEntry]) -> Result<(), WellnessError> {
    for entry in entries {
        for dimension in Dimension::ALL {
            let value = dimension.value(entry);
            if value > MAX_RATING {
                return Err(WellnessError::RatingOutOfRange {
                    dimension,
                    value,
                    date: entry.date,
                });
            }
        }
    }
    Ok(())
}

/// Aggregate a window of check-ins.
///
/// Returns `Ok(None)` for an empty window: there is nothing to average and
/// no most common exercise duration.
pub fn aggregate(entries: &[WellnessEntry]) -> Result<Option<WellnessStats>, WellnessError> {
    validate(entries)?;

    let Some(most_common_exercise) = most_common_exercise(entries) else {
        return Ok(None);
    };

    let count = entries.len() as f64;
    let mean = |dimension: Dimension| {
        let sum: u32 = entries.iter().map(|e| u32::from(dimension.value(e))).sum();
        f64::from(sum) / count
    };

    Ok(Some(WellnessStats {
        averages: DimensionAverages {
            water_intake: mean(Dimension::WaterIntake),
            sunlight_exposure: mean(Dimension::SunlightExposure),
            healthy_meals: mean(Dimension::HealthyMeals),
            sleep_hours: mean(Dimension::SleepHours),
            social_interactions: mean(Dimension::SocialInteractions),
        },
        most_common_exercise,
        entry_count: entries.len(),
    }))
}

/// Count check-ins per exercise duration, in the order each duration
/// first appears.
pub fn exercise_frequency(entries: &[WellnessEntry]) -> Vec<ExerciseCount> {
    let mut counts: Vec<ExerciseCount> = Vec::new();
    for entry in entries {
        match counts
            .iter_mut()
            .find(|c| c.duration == entry.exercise_duration)
        {
            Some(c) => c.count += 1,
            None => counts.push(ExerciseCount {
                duration: entry.exercise_duration,
                count: 1,
            }),
        }
    }
    counts
}

/// Duration with the highest count. Ties go to the duration seen first.
pub fn most_common_exercise(entries: &[WellnessEntry]) -> Option<ExerciseDuration> {
    exercise_frequency(entries)
        .into_iter()
        .fold(None, |best: Option<ExerciseCount>, c| match best {
            Some(b) if b.count >= c.count => Some(b),
            _ => Some(c),
        })
        .map(|c| c.duration)
}
