use serde::{Deserialize, Serialize};

use crate::modules::timecards::core::actions::{Entered, PersonId, TimecardAction};
use crate::modules::timecards::core::status::TimecardStatus;

/// One entry of a timecard's lifecycle log. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub occurred_at: i64,
    pub transitioned_to: TimecardStatus,
    pub action: TimecardAction,
}

impl Transition {
    pub fn new(action: TimecardAction, transitioned_to: TimecardStatus, occurred_at: i64) -> Self {
        Self {
            occurred_at,
            transitioned_to,
            action,
        }
    }

    pub fn entered(person: PersonId, occurred_at: i64) -> Self {
        Self::new(
            TimecardAction::Entered(Entered { person }),
            TimecardStatus::Draft,
            occurred_at,
        )
    }
}
