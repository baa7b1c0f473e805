// Maps handler outcomes onto HTTP status codes and a typed error body.
//
// Body shape: {"code": "<kind>", "message": "<text>"}. The code names the kind so callers can tell
// the 409 variants apart.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::timecards::application::errors::ApplicationError;
use crate::modules::timecards::core::decide::DecideError;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "InvalidBody",
            rejection.body_text(),
        )
    }
}

// Ids that cannot be parsed never name a resource.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::new(StatusCode::NOT_FOUND, "NotFound", rejection.body_text())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        let message = error.to_string();
        match error {
            ApplicationError::TimecardNotFound(_) | ApplicationError::LineNotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, "NotFound", message)
            }
            ApplicationError::Domain(reason) => {
                let (status, code) = match reason {
                    DecideError::InvalidState { .. } => (StatusCode::CONFLICT, "InvalidStateError"),
                    DecideError::EmptyTimecard => (StatusCode::CONFLICT, "EmptyTimecardError"),
                    DecideError::MissingTransition { .. } => {
                        (StatusCode::CONFLICT, "MissingTransitionError")
                    }
                    DecideError::InvalidApprover { .. } => {
                        (StatusCode::FORBIDDEN, "InvalidApproverError")
                    }
                };
                ApiError::new(status, code, message)
            }
            ApplicationError::InvalidLine(_) => {
                ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "InvalidLineError", message)
            }
            ApplicationError::Store(_) => {
                tracing::error!(%message, "timecard store failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "StoreError", message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let payload = ErrorResponse {
            code: self.code,
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}
