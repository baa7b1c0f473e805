// A recorded unit of work on a timecard.
//
// Responsibilities
// - Keep the identifier and recorded time fixed for the life of the line.
// - Apply updates as a merge against the line's JSON document: only keys present in the patch change.
//   Full replacement goes through the same merge, fed with every field of a DocumentLine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum LinePatchError {
    #[error("line patch must be a JSON object")]
    NotAnObject,

    #[error("line document is invalid: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Mutable fields of a line, as sent by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLine {
    pub work_date: NaiveDate,
    pub hours: f64,
    pub project: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl DocumentLine {
    pub const FIELDS: [&'static str; 4] = ["work_date", "hours", "project", "description"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardLine {
    pub line_id: Uuid,
    pub recorded: i64,
    pub work_date: NaiveDate,
    pub hours: f64,
    pub project: String,
    pub description: Option<String>,
}

impl TimecardLine {
    pub fn record(document: DocumentLine, recorded: i64) -> Self {
        Self {
            line_id: Uuid::now_v7(),
            recorded,
            work_date: document.work_date,
            hours: document.hours,
            project: document.project,
            description: document.description,
        }
    }

    pub fn document(&self) -> DocumentLine {
        DocumentLine {
            work_date: self.work_date,
            hours: self.hours,
            project: self.project.clone(),
            description: self.description.clone(),
        }
    }

    pub fn merge(&mut self, patch: &Value) -> Result<(), LinePatchError> {
        let Value::Object(fields) = patch else {
            return Err(LinePatchError::NotAnObject);
        };

        let mut document = serde_json::to_value(self.document())?;
        if let Value::Object(target) = &mut document {
            for key in DocumentLine::FIELDS {
                if let Some(value) = fields.get(key) {
                    target.insert(key.to_string(), value.clone());
                }
            }
        }

        let merged: DocumentLine = serde_json::from_value(document)?;
        self.work_date = merged.work_date;
        self.hours = merged.hours;
        self.project = merged.project;
        self.description = merged.description;
        Ok(())
    }

    pub fn replace(&mut self, document: &DocumentLine) -> Result<(), LinePatchError> {
        self.merge(&serde_json::to_value(document)?)
    }
}
