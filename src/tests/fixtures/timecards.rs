// Builds timecards already sitting in a given lifecycle status, bypassing the deciders.

use crate::modules::timecards::core::actions::{
    Approval, Cancellation, PersonId, Rejection, Submittal, TimecardAction,
};
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::timecard::Timecard;
use crate::tests::fixtures::commands::document_line::DocumentLineBuilder;

pub const EMPLOYEE: PersonId = 1;
pub const MANAGER: PersonId = 2;
pub const OPENED_AT: i64 = 1_700_000_000_000;

pub struct TimecardBuilder {
    lines: usize,
    status: TimecardStatus,
}

impl Default for TimecardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimecardBuilder {
    pub fn new() -> Self {
        Self {
            lines: 0,
            status: TimecardStatus::Draft,
        }
    }

    pub fn with_lines(mut self, count: usize) -> Self {
        self.lines = count;
        self
    }

    pub fn in_status(mut self, status: TimecardStatus) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Timecard {
        let mut timecard = Timecard::open(EMPLOYEE, OPENED_AT);
        let mut now = OPENED_AT;
        for _ in 0..self.lines {
            now += 1;
            timecard.add_line(DocumentLineBuilder::new().build(), now);
        }

        let submit = |timecard: &mut Timecard, at: i64| {
            timecard.add_transition(
                TimecardAction::Submittal(Submittal { person: EMPLOYEE }),
                TimecardStatus::Submitted,
                at,
            );
        };

        now += 1;
        match self.status {
            TimecardStatus::Draft => {}
            TimecardStatus::Submitted => submit(&mut timecard, now),
            TimecardStatus::Approved => {
                submit(&mut timecard, now);
                timecard.add_transition(
                    TimecardAction::Approval(Approval { person: MANAGER }),
                    TimecardStatus::Approved,
                    now + 1,
                );
            }
            TimecardStatus::Rejected => {
                submit(&mut timecard, now);
                timecard.add_transition(
                    TimecardAction::Rejection(Rejection {
                        person: MANAGER,
                        reason: "hours do not add up".into(),
                    }),
                    TimecardStatus::Rejected,
                    now + 1,
                );
            }
            TimecardStatus::Cancelled => {
                timecard.add_transition(
                    TimecardAction::Cancellation(Cancellation {
                        person: EMPLOYEE,
                        reason: "duplicate".into(),
                    }),
                    TimecardStatus::Cancelled,
                    now,
                );
            }
        }
        timecard
    }
}
