use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Upper bound of every daily rating. Ratings are inclusive `0..=MAX_RATING`.
pub const MAX_RATING: u8 = 10;

/// How long the subject exercised on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ExerciseDuration {
    #[serde(rename = "none")]
    NoExercise,
    #[serde(rename = "under15")]
    Under15,
    #[serde(rename = "under30")]
    Under30,
    #[serde(rename = "above30")]
    Above30,
}

impl ExerciseDuration {
    pub const ALL: [ExerciseDuration; 4] = [
        ExerciseDuration::NoExercise,
        ExerciseDuration::Under15,
        ExerciseDuration::Under30,
        ExerciseDuration::Above30,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ExerciseDuration::NoExercise => "none",
            ExerciseDuration::Under15 => "under15",
            ExerciseDuration::Under30 => "under30",
            ExerciseDuration::Above30 => "above30",
        }
    }
}

impl fmt::Display for ExerciseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseDuration {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExerciseDuration::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CoreError::UnknownExerciseDuration(s.to_string()))
    }
}

/// One daily check-in. Ratings are 0–10; the aggregator rejects anything
/// outside that range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WellnessEntry {
    pub date: jiff::civil::Date,
    pub water_intake: u8,
    pub sunlight_exposure: u8,
    pub healthy_meals: u8,
    pub sleep_hours: u8,
    pub social_interactions: u8,
    pub exercise_duration: ExerciseDuration,
    #[serde(default)]
    pub task_notes: String,
    #[serde(default)]
    pub remarks: String,
}
