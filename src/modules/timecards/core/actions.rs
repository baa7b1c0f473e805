// Lifecycle action payloads.
//
// Purpose
// - Describe who moved a timecard through its lifecycle, and with which metadata.
//
// Structure
// - One payload struct per action. These double as the request bodies of the transition endpoints.
// - TimecardAction is the tagged root enum stored inside a Transition. The `type` tag names the action.

use serde::{Deserialize, Serialize};

pub type PersonId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entered {
    pub person: PersonId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submittal {
    pub person: PersonId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub person: PersonId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub person: PersonId,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancellation {
    pub person: PersonId,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftReopen {
    pub person: PersonId,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TimecardAction {
    Entered(Entered),
    Submittal(Submittal),
    Approval(Approval),
    Rejection(Rejection),
    Cancellation(Cancellation),
    DraftReopen(DraftReopen),
}

impl TimecardAction {
    pub fn person(&self) -> PersonId {
        match self {
            TimecardAction::Entered(a) => a.person,
            TimecardAction::Submittal(a) => a.person,
            TimecardAction::Approval(a) => a.person,
            TimecardAction::Rejection(a) => a.person,
            TimecardAction::Cancellation(a) => a.person,
            TimecardAction::DraftReopen(a) => a.person,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            TimecardAction::Rejection(a) => Some(&a.reason),
            TimecardAction::Cancellation(a) => Some(&a.reason),
            TimecardAction::DraftReopen(a) => Some(&a.reason),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TimecardAction::Entered(_) => "Entered",
            TimecardAction::Submittal(_) => "Submittal",
            TimecardAction::Approval(_) => "Approval",
            TimecardAction::Rejection(_) => "Rejection",
            TimecardAction::Cancellation(_) => "Cancellation",
            TimecardAction::DraftReopen(_) => "DraftReopen",
        }
    }
}
