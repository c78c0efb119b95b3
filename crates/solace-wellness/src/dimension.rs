use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use solace_core::models::wellness::WellnessEntry;

/// The five numeric ratings recorded in every check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Dimension {
    WaterIntake,
    SunlightExposure,
    HealthyMeals,
    SleepHours,
    SocialInteractions,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::WaterIntake,
        Dimension::SunlightExposure,
        Dimension::HealthyMeals,
        Dimension::SleepHours,
        Dimension::SocialInteractions,
    ];

    pub fn value(self, entry: &WellnessEntry) -> u8 {
        match self {
            Dimension::WaterIntake => entry.water_intake,
            Dimension::SunlightExposure => entry.sunlight_exposure,
            Dimension::HealthyMeals => entry.healthy_meals,
            Dimension::SleepHours => entry.sleep_hours,
            Dimension::SocialInteractions => entry.social_interactions,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Dimension::WaterIntake => "waterIntake",
            Dimension::SunlightExposure => "sunlightExposure",
            Dimension::HealthyMeals => "healthyMeals",
            Dimension::SleepHours => "sleepHours",
            Dimension::SocialInteractions => "socialInteractions",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
