use thiserror::Error;
use uuid::Uuid;

use crate::modules::timecards::adapters::outbound::timecard_store::StoreError;
use crate::modules::timecards::core::decide::DecideError;
use crate::modules::timecards::core::line::LinePatchError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("timecard {0} not found")]
    TimecardNotFound(Uuid),

    #[error("line {line_id} not found on timecard {timecard_id}")]
    LineNotFound { timecard_id: Uuid, line_id: Uuid },

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    InvalidLine(#[from] LinePatchError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ApplicationError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => ApplicationError::TimecardNotFound(id),
            other => ApplicationError::Store(other),
        }
    }
}
