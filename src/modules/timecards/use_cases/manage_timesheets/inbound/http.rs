use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::timecards::adapters::inbound::api_error::ApiError;
use crate::modules::timecards::adapters::inbound::views::TimecardView;
use crate::modules::timecards::core::actions::PersonId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DocumentPerson {
    pub id: PersonId,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TimecardView>>, ApiError> {
    let timecards = state.manage_handler.list().await?;
    Ok(Json(timecards.iter().map(TimecardView::from).collect()))
}

pub async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TimecardView>, ApiError> {
    let Path(id) = path?;
    let timecard = state.manage_handler.get(id).await?;
    Ok(Json(TimecardView::from(&timecard)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<DocumentPerson>, JsonRejection>,
) -> Result<Json<TimecardView>, ApiError> {
    let Json(person) = body?;
    let timecard = state.manage_handler.create(person.id).await?;
    Ok(Json(TimecardView::from(&timecard)))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    state.manage_handler.delete(id).await?;
    Ok(StatusCode::OK)
}
