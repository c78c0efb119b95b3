use serde::{Deserialize, Serialize};
use ts_rs::TS;

use solace_core::models::wellness::WellnessEntry;

use crate::aggregate;
use crate::error::WellnessError;

/// One point on the wellness trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartPoint {
    pub date: jiff::civil::Date,
    /// Axis label, e.g. "Oct 04".
    pub label: String,
    pub water_intake: u8,
    pub sunlight_exposure: u8,
    pub healthy_meals: u8,
    pub sleep_hours: u8,
    pub social_interactions: u8,
}

impl From<&WellnessEntry> for ChartPoint {
    fn from(entry: &WellnessEntry) -> Self {
        Self {
            date: entry.date,
            label: entry.date.strftime("%b %d").to_string(),
            water_intake: entry.water_intake,
            sunlight_exposure: entry.sunlight_exposure,
            healthy_meals: entry.healthy_meals,
            sleep_hours: entry.sleep_hours,
            social_interactions: entry.social_interactions,
        }
    }
}

/// The `limit` most recent check-ins in ascending date order.
///
/// Entries sharing a date keep their relative input order before the
/// window is reversed. Every entry is validated, not only the charted
/// window.
pub fn chart_series(
    entries: &[WellnessEntry],
    limit: usize,
) -> Result<Vec<ChartPoint>, WellnessError> {
    aggregate::validate(entries)?;

    let mut recent: Vec<&WellnessEntry> = entries.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent.reverse();
    Ok(recent.into_iter().map(ChartPoint::from).collect())
}
