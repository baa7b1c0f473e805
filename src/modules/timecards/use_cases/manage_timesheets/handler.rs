use crate::modules::timecards::adapters::outbound::timecard_store::TimecardStore;
use crate::modules::timecards::application::errors::ApplicationError;
use crate::modules::timecards::core::actions::PersonId;
use crate::modules::timecards::core::decide::decide_delete;
use crate::modules::timecards::core::timecard::Timecard;
use crate::shared::core::primitives::now_millis;
use std::sync::Arc;
use uuid::Uuid;

pub struct ManageTimesheetsHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ManageTimesheetsHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Timecard>, ApplicationError> {
        tracing::info!("looking for timesheets");
        let mut timecards = self.store.all().await?;
        timecards.sort_by_key(|t| (t.opened_at, t.id));
        Ok(timecards)
    }

    pub async fn get(&self, id: Uuid) -> Result<Timecard, ApplicationError> {
        tracing::info!(timecard_id = %id, "looking for timesheet");
        Ok(self.store.get(id).await?)
    }

    pub async fn create(&self, employee: PersonId) -> Result<Timecard, ApplicationError> {
        let timecard = Timecard::open(employee, now_millis());
        tracing::info!(timecard_id = %timecard.id, employee, "creating timesheet");
        self.store.add(timecard.clone()).await?;
        Ok(timecard)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApplicationError> {
        let timecard = self.store.get(id).await?;
        if let Err(reason) = decide_delete(&timecard) {
            tracing::warn!(timecard_id = %id, %reason, "refusing to delete timesheet");
            return Err(reason.into());
        }
        self.store.delete(id).await?;
        tracing::info!(timecard_id = %id, "deleted timesheet");
        Ok(())
    }
}
