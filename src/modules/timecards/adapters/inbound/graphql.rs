use async_graphql::{Context, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::timecards::core::line::TimecardLine;
use crate::modules::timecards::core::timecard::Timecard;
use crate::modules::timecards::core::transition::Transition;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLine {
    pub line_id: String,
    pub recorded: i64,
    pub work_date: String,
    pub hours: f64,
    pub project: String,
    pub description: Option<String>,
}

impl From<TimecardLine> for GqlLine {
    fn from(l: TimecardLine) -> Self {
        Self {
            line_id: l.line_id.to_string(),
            recorded: l.recorded,
            work_date: l.work_date.to_string(),
            hours: l.hours,
            project: l.project,
            description: l.description,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTransition {
    pub occurred_at: i64,
    pub transitioned_to: String,
    pub action: String,
    pub person: i32,
    pub reason: Option<String>,
}

impl From<Transition> for GqlTransition {
    fn from(t: Transition) -> Self {
        Self {
            occurred_at: t.occurred_at,
            transitioned_to: t.transitioned_to.to_string(),
            action: t.action.kind().to_string(),
            person: t.action.person(),
            reason: t.action.reason().map(str::to_string),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimesheet {
    pub id: String,
    pub employee: i32,
    pub opened_at: i64,
    pub status: String,
    pub lines: Vec<GqlLine>,
    pub transitions: Vec<GqlTransition>,
}

impl From<Timecard> for GqlTimesheet {
    fn from(t: Timecard) -> Self {
        Self {
            id: t.id.to_string(),
            employee: t.employee,
            opened_at: t.opened_at,
            status: t.status().to_string(),
            lines: t.sorted_lines().into_iter().map(Into::into).collect(),
            transitions: t.transitions().iter().cloned().map(Into::into).collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn timesheets(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTimesheet>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.manage_handler.list().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn timesheet(&self, context: &Context<'_>, id: String) -> GqlResult<GqlTimesheet> {
        let state = context.data_unchecked::<AppState>();
        let id = Uuid::parse_str(&id)?;
        Ok(state.manage_handler.get(id).await?.into())
    }
}
