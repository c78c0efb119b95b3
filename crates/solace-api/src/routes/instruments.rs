use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use solace_core::models::answer_set::AnswerSet;
use solace_core::models::assessment::AssessmentRecord;
use solace_core::models::instrument_key::InstrumentKey;
use solace_instruments::Instrument;
use solace_instruments::change::{self, ChangeResult};
use solace_instruments::presentation::{TierLabel, display_tier};
use solace_instruments::scoring::{self, Cutoff, Question, ScoreResult};

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentSummary {
    key: InstrumentKey,
    name: String,
    question_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDetail {
    key: InstrumentKey,
    name: String,
    description: String,
    questions: Vec<Question>,
    cutoffs: Vec<Cutoff>,
    change_threshold: u32,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    result: ScoreResult,
    tier: TierLabel,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequest {
    previous_score: u32,
    current_score: u32,
}

pub async fn list_instruments(State(state): State<AppState>) -> Json<Vec<InstrumentSummary>> {
    let instruments = state
        .catalog
        .instruments()
        .map(|i| InstrumentSummary {
            key: i.key(),
            name: i.name().to_string(),
            question_count: i.questions().len(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = state.catalog.get_str(&key)?;

    Ok(Json(InstrumentDetail {
        key: instrument.key(),
        name: instrument.name().to_string(),
        description: instrument.description().to_string(),
        questions: instrument.questions().to_vec(),
        cutoffs: instrument.cutoffs().to_vec(),
        change_threshold: instrument.change_threshold(),
    }))
}

pub async fn score_answers(
    State(state): State<AppState>,
    Path(key): Path<String>,
    ApiJson(answers): ApiJson<AnswerSet>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let instrument = state.catalog.get_str(&key)?;
    let result = scoring::score(instrument, &answers).inspect_err(|e| {
        tracing::debug!(instrument = %instrument.key(), error = %e, "scoring rejected");
    })?;

    let tier = display_tier(result.severity_level);
    Ok(Json(ScoreResponse { result, tier }))
}

pub async fn detect_change(
    State(state): State<AppState>,
    Path(key): Path<String>,
    ApiJson(request): ApiJson<ChangeRequest>,
) -> Result<Json<ChangeResult>, ApiError> {
    let instrument = state.catalog.get_str(&key)?;
    let result = change::detect_change(instrument, request.previous_score, request.current_score)
        .inspect_err(|e| {
            tracing::debug!(instrument = %instrument.key(), error = %e, "change detection rejected");
        })?;
    Ok(Json(result))
}

pub async fn latest_change(
    State(state): State<AppState>,
    Path(key): Path<String>,
    ApiJson(records): ApiJson<Vec<AssessmentRecord>>,
) -> Result<Json<Option<ChangeResult>>, ApiError> {
    let instrument = state.catalog.get_str(&key)?;
    let result = change::latest_change(&state.catalog, instrument.key(), &records)?;
    Ok(Json(result))
}
