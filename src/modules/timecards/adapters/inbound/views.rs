use serde::Serialize;
use uuid::Uuid;

use crate::modules::timecards::core::actions::PersonId;
use crate::modules::timecards::core::line::TimecardLine;
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::timecard::Timecard;
use crate::modules::timecards::core::transition::Transition;

/// Response shape of a timecard, with the derived status spelled out and lines sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimecardView {
    pub id: Uuid,
    pub employee: PersonId,
    pub opened_at: i64,
    pub status: TimecardStatus,
    pub lines: Vec<TimecardLine>,
    pub transitions: Vec<Transition>,
}

impl From<&Timecard> for TimecardView {
    fn from(timecard: &Timecard) -> Self {
        Self {
            id: timecard.id,
            employee: timecard.employee,
            opened_at: timecard.opened_at,
            status: timecard.status(),
            lines: timecard.sorted_lines(),
            transitions: timecard.transitions().to_vec(),
        }
    }
}
