// Line recording handler orchestrates the write flow for lines of worked time.
//
// Responsibilities
// - Load the timecard from the store.
// - Guard new lines with the decider: only a draft accepts them.
// - Apply replacements and merge patches to existing lines. These are not status guarded.
// - Persist the mutated timecard.

use crate::modules::timecards::adapters::outbound::timecard_store::TimecardStore;
use crate::modules::timecards::application::errors::ApplicationError;
use crate::modules::timecards::core::decide::decide_add_line;
use crate::modules::timecards::core::line::{DocumentLine, TimecardLine};
use crate::shared::core::primitives::now_millis;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

pub struct RecordLinesHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RecordLinesHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, id: Uuid) -> Result<Vec<TimecardLine>, ApplicationError> {
        tracing::info!(timecard_id = %id, "looking for timesheet lines");
        Ok(self.store.get(id).await?.sorted_lines())
    }

    pub async fn get(&self, id: Uuid, line_id: Uuid) -> Result<TimecardLine, ApplicationError> {
        tracing::info!(timecard_id = %id, %line_id, "looking for timesheet line");
        let timecard = self.store.get(id).await?;
        timecard
            .line(line_id)
            .cloned()
            .ok_or(ApplicationError::LineNotFound {
                timecard_id: id,
                line_id,
            })
    }

    pub async fn add(
        &self,
        id: Uuid,
        document: DocumentLine,
    ) -> Result<TimecardLine, ApplicationError> {
        let mut timecard = self.store.get(id).await?;
        if let Err(reason) = decide_add_line(&timecard) {
            tracing::warn!(timecard_id = %id, %reason, "refusing to add line");
            return Err(reason.into());
        }
        let line = timecard.add_line(document, now_millis());
        self.store.update(timecard).await?;
        tracing::info!(timecard_id = %id, line_id = %line.line_id, "added line");
        Ok(line)
    }

    pub async fn replace(
        &self,
        id: Uuid,
        line_id: Uuid,
        document: DocumentLine,
    ) -> Result<TimecardLine, ApplicationError> {
        let mut timecard = self.store.get(id).await?;
        let line = timecard
            .replace_line(line_id, &document)?
            .ok_or(ApplicationError::LineNotFound {
                timecard_id: id,
                line_id,
            })?;
        self.store.update(timecard).await?;
        tracing::info!(timecard_id = %id, %line_id, "replaced line");
        Ok(line)
    }

    pub async fn patch(
        &self,
        id: Uuid,
        line_id: Uuid,
        patch: Value,
    ) -> Result<TimecardLine, ApplicationError> {
        let mut timecard = self.store.get(id).await?;
        let line = timecard
            .update_line(line_id, &patch)?
            .ok_or(ApplicationError::LineNotFound {
                timecard_id: id,
                line_id,
            })?;
        self.store.update(timecard).await?;
        tracing::info!(timecard_id = %id, %line_id, "patched line");
        Ok(line)
    }
}
