// Lifecycle transition handler.
//
// Responsibilities
// - Load the timecard, ask the decider where the action leads, append the transition, persist.
// - Answer transition queries: full history, or the latest transition into a status the timecard currently holds.

use crate::modules::timecards::adapters::outbound::timecard_store::TimecardStore;
use crate::modules::timecards::application::errors::ApplicationError;
use crate::modules::timecards::core::actions::TimecardAction;
use crate::modules::timecards::core::decide::{decide_current_transition, decide_transition};
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::transition::Transition;
use crate::shared::core::primitives::now_millis;
use std::sync::Arc;
use uuid::Uuid;

pub struct TransitionTimesheetHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> TransitionTimesheetHandler<TStore>
where
    TStore: TimecardStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn history(&self, id: Uuid) -> Result<Vec<Transition>, ApplicationError> {
        tracing::info!(timecard_id = %id, "looking for timesheet transitions");
        Ok(self.store.get(id).await?.transitions().to_vec())
    }

    pub async fn apply(
        &self,
        id: Uuid,
        action: TimecardAction,
    ) -> Result<Transition, ApplicationError> {
        let mut timecard = self.store.get(id).await?;
        let target = match decide_transition(&timecard, &action) {
            Ok(target) => target,
            Err(reason) => {
                tracing::warn!(timecard_id = %id, action = action.kind(), %reason, "refusing transition");
                return Err(reason.into());
            }
        };
        let transition = timecard.add_transition(action, target, now_millis());
        self.store.update(timecard).await?;
        tracing::info!(
            timecard_id = %id,
            action = transition.action.kind(),
            transitioned_to = %transition.transitioned_to,
            "added transition"
        );
        Ok(transition)
    }

    pub async fn current(
        &self,
        id: Uuid,
        status: TimecardStatus,
    ) -> Result<Transition, ApplicationError> {
        tracing::info!(timecard_id = %id, %status, "looking for current transition");
        let timecard = self.store.get(id).await?;
        Ok(decide_current_transition(&timecard, status)?.clone())
    }
}
