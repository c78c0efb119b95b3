use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use solace_core::models::wellness::WellnessEntry;
use solace_wellness::aggregate::{self, WellnessStats};
use solace_wellness::chart::{self, ChartPoint};

use crate::error::{ApiError, ApiJson, ApiQuery};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChartQuery {
    limit: Option<usize>,
}

/// `null` when no check-ins were supplied.
pub async fn stats(
    ApiJson(entries): ApiJson<Vec<WellnessEntry>>,
) -> Result<Json<Option<WellnessStats>>, ApiError> {
    let stats = aggregate::aggregate(&entries).inspect_err(|e| {
        tracing::debug!(entries = entries.len(), error = %e, "wellness aggregation rejected");
    })?;
    Ok(Json(stats))
}

pub async fn chart(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ChartQuery>,
    ApiJson(entries): ApiJson<Vec<WellnessEntry>>,
) -> Result<Json<Vec<ChartPoint>>, ApiError> {
    let limit = query.limit.unwrap_or(state.chart_limit);
    let series = chart::chart_series(&entries, limit).inspect_err(|e| {
        tracing::debug!(entries = entries.len(), error = %e, "wellness chart rejected");
    })?;
    Ok(Json(series))
}
