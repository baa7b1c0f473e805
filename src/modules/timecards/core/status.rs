use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimecardStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
    Cancelled,
}

impl TimecardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimecardStatus::Draft => "Draft",
            TimecardStatus::Submitted => "Submitted",
            TimecardStatus::Approved => "Approved",
            TimecardStatus::Rejected => "Rejected",
            TimecardStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for TimecardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
