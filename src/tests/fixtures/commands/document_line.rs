// Shared test fixture for the DocumentLine payload.
// The canonical payload lives in json/document_line.json so HTTP tests and unit tests agree on it.

use crate::modules::timecards::core::line::DocumentLine;
use chrono::NaiveDate;
use std::fs;

pub const DOCUMENT_LINE_JSON: &str = "./src/tests/fixtures/commands/json/document_line.json";

pub struct DocumentLineBuilder {
    inner: DocumentLine,
}

impl Default for DocumentLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DocumentLineBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(DOCUMENT_LINE_JSON).unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn work_date(mut self, v: NaiveDate) -> Self {
        self.inner.work_date = v;
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.inner.project = v.into();
        self
    }

    pub fn description(mut self, v: Option<String>) -> Self {
        self.inner.description = v;
        self
    }

    pub fn build(self) -> DocumentLine {
        self.inner
    }

    pub fn json(self) -> String {
        serde_json::to_string(&self.inner).unwrap()
    }
}

#[cfg(test)]
mod document_line_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = DocumentLineBuilder::default().build();
        assert_eq!(built.work_date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(built.hours, 8.0);
        assert_eq!(built.project, "timesheets");
        assert_eq!(built.description.as_deref(), Some("Reviewed approval flow"));
    }

    #[rstest]
    fn setters_override_all_fields() {
        let built = DocumentLineBuilder::new()
            .work_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
            .hours(1.5)
            .project("ops")
            .description(None)
            .build();
        assert_eq!(built.work_date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(built.hours, 1.5);
        assert_eq!(built.project, "ops");
        assert_eq!(built.description, None);
    }
}
