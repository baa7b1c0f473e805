// In memory implementation of the TimecardStore port.
//
// Purpose
// - Support handler tests and local development without a database.

use crate::modules::timecards::adapters::outbound::timecard_store::{StoreError, TimecardStore};
use crate::modules::timecards::core::timecard::Timecard;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryTimecardStore {
    timecards: RwLock<HashMap<Uuid, Timecard>>,
    is_offline: bool,
}

impl InMemoryTimecardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Timecard store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimecardStore for InMemoryTimecardStore {
    async fn add(&self, timecard: Timecard) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.timecards.write().await;
        if guard.contains_key(&timecard.id) {
            return Err(StoreError::Duplicate(timecard.id));
        }
        guard.insert(timecard.id, timecard);
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Timecard>, StoreError> {
        self.ensure_online()?;
        Ok(self.timecards.read().await.get(&id).cloned())
    }

    async fn update(&self, timecard: Timecard) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.timecards.write().await;
        match guard.get_mut(&timecard.id) {
            Some(slot) => {
                *slot = timecard;
                Ok(())
            }
            None => Err(StoreError::NotFound(timecard.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.timecards
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn all(&self) -> Result<Vec<Timecard>, StoreError> {
        self.ensure_online()?;
        Ok(self.timecards.read().await.values().cloned().collect())
    }
}
