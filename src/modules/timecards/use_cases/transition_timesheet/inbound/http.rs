// One POST/GET pair per lifecycle transition.
//
// - POST applies the guarded transition with the action payload as body.
// - GET returns the latest transition into the target status, while the timecard still holds it.

use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
};
use uuid::Uuid;

use crate::modules::timecards::adapters::inbound::api_error::ApiError;
use crate::modules::timecards::core::actions::{
    Approval, Cancellation, DraftReopen, Rejection, Submittal, TimecardAction,
};
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::transition::Transition;
use crate::shell::state::AppState;

pub async fn history(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Transition>>, ApiError> {
    let Path(id) = path?;
    Ok(Json(state.transition_handler.history(id).await?))
}

async fn apply(
    state: AppState,
    id: Uuid,
    action: TimecardAction,
) -> Result<Json<Transition>, ApiError> {
    Ok(Json(state.transition_handler.apply(id, action).await?))
}

async fn current(
    state: AppState,
    id: Uuid,
    status: TimecardStatus,
) -> Result<Json<Transition>, ApiError> {
    Ok(Json(state.transition_handler.current(id, status).await?))
}

pub async fn submit(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<Submittal>, JsonRejection>,
) -> Result<Json<Transition>, ApiError> {
    let Path(id) = path?;
    let Json(submittal) = body?;
    apply(state, id, TimecardAction::Submittal(submittal)).await
}

pub async fn get_submittal(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Transition>, ApiError> {
    let Path(id) = path?;
    current(state, id, TimecardStatus::Submitted).await
}

pub async fn cancel(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<Cancellation>, JsonRejection>,
) -> Result<Json<Transition>, ApiError> {
    let Path(id) = path?;
    let Json(cancellation) = body?;
    apply(state, id, TimecardAction::Cancellation(cancellation)).await
}

pub async fn get_cancellation(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Transition>, ApiError> {
    let Path(id) = path?;
    current(state, id, TimecardStatus::Cancelled).await
}

pub async fn reject(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<Rejection>, JsonRejection>,
) -> Result<Json<Transition>, ApiError> {
    let Path(id) = path?;
    let Json(rejection) = body?;
    apply(state, id, TimecardAction::Rejection(rejection)).await
}

pub async fn get_rejection(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Transition>, ApiError> {
    let Path(id) = path?;
    current(state, id, TimecardStatus::Rejected).await
}

pub async fn approve(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<Approval>, JsonRejection>,
) -> Result<Json<Transition>, ApiError> {
    let Path(id) = path?;
    let Json(approval) = body?;
    apply(state, id, TimecardAction::Approval(approval)).await
}

pub async fn get_approval(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Transition>, ApiError> {
    let Path(id) = path?;
    current(state, id, TimecardStatus::Approved).await
}

pub async fn reopen(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<DraftReopen>, JsonRejection>,
) -> Result<Json<Transition>, ApiError> {
    let Path(id) = path?;
    let Json(reopen) = body?;
    apply(state, id, TimecardAction::DraftReopen(reopen)).await
}

pub async fn get_draft(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Transition>, ApiError> {
    let Path(id) = path?;
    current(state, id, TimecardStatus::Draft).await
}
