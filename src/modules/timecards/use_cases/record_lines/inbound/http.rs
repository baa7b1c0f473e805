use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
};
use serde_json::Value;
use uuid::Uuid;

use crate::modules::timecards::adapters::inbound::api_error::ApiError;
use crate::modules::timecards::core::line::{DocumentLine, TimecardLine};
use crate::shell::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<TimecardLine>>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.lines_handler.list(id).await?))
}

pub async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<(Uuid, Uuid)>, PathRejection>,
) -> Result<Json<TimecardLine>, ApiError> {
    let Path((id, line_id)) = path?;
    Ok(Json(state.lines_handler.get(id, line_id).await?))
}

pub async fn add(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<DocumentLine>, JsonRejection>,
) -> Result<Json<TimecardLine>, ApiError> {
    let Path(id) = path?;
    let Json(document) = body?;
    Ok(Json(state.lines_handler.add(id, document).await?))
}

pub async fn replace(
    State(state): State<AppState>,
    path: Result<Path<(Uuid, Uuid)>, PathRejection>,
    body: Result<Json<DocumentLine>, JsonRejection>,
) -> Result<Json<TimecardLine>, ApiError> {
    let Path((id, line_id)) = path?;
    let Json(document) = body?;
    Ok(Json(state.lines_handler.replace(id, line_id, document).await?))
}

pub async fn patch(
    State(state): State<AppState>,
    path: Result<Path<(Uuid, Uuid)>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TimecardLine>, ApiError> {
    let Path((id, line_id)) = path?;
    let Json(patch) = body?;
    Ok(Json(state.lines_handler.patch(id, line_id, patch).await?))
}
