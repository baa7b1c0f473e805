// Port for timecard persistence.
//
// Purpose
// - Keyed lookup, insert, replace and delete of whole timecard aggregates.
//
// Boundaries
// - No domain rules here. Handlers decide first and persist the mutated aggregate afterwards.
// - Each call is atomic on its own. Two overlapping load-modify-save cycles on one id are last write wins.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::timecards::core::timecard::Timecard;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("timecard {0} not found")]
    NotFound(Uuid),

    #[error("timecard {0} already exists")]
    Duplicate(Uuid),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TimecardStore: Send + Sync {
    async fn add(&self, timecard: Timecard) -> Result<(), StoreError>;
    async fn find(&self, id: Uuid) -> Result<Option<Timecard>, StoreError>;
    async fn update(&self, timecard: Timecard) -> Result<(), StoreError>;
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
    async fn all(&self) -> Result<Vec<Timecard>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Timecard, StoreError> {
        self.find(id).await?.ok_or(StoreError::NotFound(id))
    }
}
