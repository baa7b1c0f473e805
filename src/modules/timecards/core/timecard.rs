// Timecard aggregate.
//
// Purpose
// - Own the lines of worked time and the append-only transition log of one employee's timecard.
// - Derive the current status from the log instead of storing it.
//
// Boundaries
// - No legality checks here. The deciders in core::decide guard every operation before it is applied.
// - No input or output. Time is passed in as epoch milliseconds.

use serde_json::Value;
use uuid::Uuid;

use crate::modules::timecards::core::actions::{PersonId, TimecardAction};
use crate::modules::timecards::core::line::{DocumentLine, LinePatchError, TimecardLine};
use crate::modules::timecards::core::status::TimecardStatus;
use crate::modules::timecards::core::transition::Transition;

#[derive(Debug, Clone, PartialEq)]
pub struct Timecard {
    pub id: Uuid,
    pub employee: PersonId,
    pub opened_at: i64,
    lines: Vec<TimecardLine>,
    transitions: Vec<Transition>,
}

impl Timecard {
    pub fn open(employee: PersonId, now: i64) -> Self {
        Self {
            id: Uuid::now_v7(),
            employee,
            opened_at: now,
            lines: Vec::new(),
            transitions: vec![Transition::entered(employee, now)],
        }
    }

    pub fn status(&self) -> TimecardStatus {
        self.transitions
            .last()
            .map(|t| t.transitioned_to)
            .unwrap_or(TimecardStatus::Draft)
    }

    pub fn lines(&self) -> &[TimecardLine] {
        &self.lines
    }

    /// Lines ordered by work date, then by the time they were recorded.
    pub fn sorted_lines(&self) -> Vec<TimecardLine> {
        let mut lines = self.lines.clone();
        lines.sort_by_key(|l| (l.work_date, l.recorded));
        lines
    }

    pub fn line(&self, line_id: Uuid) -> Option<&TimecardLine> {
        self.lines.iter().find(|l| l.line_id == line_id)
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn add_line(&mut self, document: DocumentLine, now: i64) -> TimecardLine {
        let line = TimecardLine::record(document, now);
        self.lines.push(line.clone());
        line
    }

    pub fn update_line(
        &mut self,
        line_id: Uuid,
        patch: &Value,
    ) -> Result<Option<TimecardLine>, LinePatchError> {
        let Some(line) = self.lines.iter_mut().find(|l| l.line_id == line_id) else {
            return Ok(None);
        };
        line.merge(patch)?;
        Ok(Some(line.clone()))
    }

    pub fn replace_line(
        &mut self,
        line_id: Uuid,
        document: &DocumentLine,
    ) -> Result<Option<TimecardLine>, LinePatchError> {
        self.update_line(line_id, &serde_json::to_value(document)?)
    }

    /// Nothing of record has happened yet: no lines and no transition past the initial entry.
    pub fn can_be_deleted(&self) -> bool {
        self.transitions.len() == 1 && self.lines.is_empty()
    }

    pub fn add_transition(
        &mut self,
        action: TimecardAction,
        transitioned_to: TimecardStatus,
        now: i64,
    ) -> Transition {
        let transition = Transition::new(action, transitioned_to, now);
        self.transitions.push(transition.clone());
        transition
    }

    pub fn find_transition(&self, status: TimecardStatus) -> Option<&Transition> {
        // max_by_key keeps the last of equal keys, so ties go to the later insertion
        self.transitions
            .iter()
            .filter(|t| t.transitioned_to == status)
            .max_by_key(|t| t.occurred_at)
    }
}
