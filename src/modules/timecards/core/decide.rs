// Pure decision functions for the timecard lifecycle.
//
// Purpose
// - Validate a requested operation against the current aggregate before it is applied.
//
// Responsibilities
// - Encode the lifecycle table: which action may leave which status, and where it lands.
// - Protect the audit history: no deletion once anything of record happened.
// - Never perform input or output, and never mutate the aggregate.

use crate::modules::timecards::core::actions::{PersonId, TimecardAction};
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::timecard::Timecard;
use crate::modules::timecards::core::transition::Transition;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error("timecard is {status}, which does not allow this action")]
    InvalidState { status: TimecardStatus },

    #[error("timecard has no lines to submit")]
    EmptyTimecard,

    #[error("timecard is {status}, there is no current {requested} transition")]
    MissingTransition {
        requested: TimecardStatus,
        status: TimecardStatus,
    },

    #[error("person {person} cannot approve their own timecard")]
    InvalidApprover { person: PersonId },
}

/// Decide which status `action` moves the timecard to.
pub fn decide_transition(
    timecard: &Timecard,
    action: &TimecardAction,
) -> Result<TimecardStatus, DecideError> {
    let status = timecard.status();
    let invalid = || DecideError::InvalidState { status };

    match action {
        TimecardAction::Entered(_) => Err(invalid()),
        TimecardAction::Submittal(_) => {
            if status != TimecardStatus::Draft {
                return Err(invalid());
            }
            if timecard.lines().is_empty() {
                return Err(DecideError::EmptyTimecard);
            }
            Ok(TimecardStatus::Submitted)
        }
        TimecardAction::Cancellation(_) => match status {
            TimecardStatus::Draft | TimecardStatus::Submitted => Ok(TimecardStatus::Cancelled),
            _ => Err(invalid()),
        },
        TimecardAction::Rejection(_) => match status {
            TimecardStatus::Submitted => Ok(TimecardStatus::Rejected),
            _ => Err(invalid()),
        },
        TimecardAction::Approval(approval) => {
            if approval.person == timecard.employee {
                return Err(DecideError::InvalidApprover {
                    person: approval.person,
                });
            }
            match status {
                TimecardStatus::Submitted => Ok(TimecardStatus::Approved),
                _ => Err(invalid()),
            }
        }
        TimecardAction::DraftReopen(_) => match status {
            TimecardStatus::Submitted => Ok(TimecardStatus::Draft),
            _ => Err(invalid()),
        },
    }
}

pub fn decide_add_line(timecard: &Timecard) -> Result<(), DecideError> {
    match timecard.status() {
        TimecardStatus::Draft => Ok(()),
        status => Err(DecideError::InvalidState { status }),
    }
}

pub fn decide_delete(timecard: &Timecard) -> Result<(), DecideError> {
    if timecard.can_be_deleted() {
        Ok(())
    } else {
        Err(DecideError::InvalidState {
            status: timecard.status(),
        })
    }
}

/// The latest transition into `requested`, available only while the timecard still sits there.
pub fn decide_current_transition(
    timecard: &Timecard,
    requested: TimecardStatus,
) -> Result<&Transition, DecideError> {
    let status = timecard.status();
    let missing = DecideError::MissingTransition { requested, status };
    if status != requested {
        return Err(missing);
    }
    timecard.find_transition(requested).ok_or(missing)
}
