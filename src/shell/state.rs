use crate::modules::timecards::adapters::outbound::timecard_store_in_memory::InMemoryTimecardStore;
use crate::modules::timecards::use_cases::manage_timesheets::handler::ManageTimesheetsHandler;
use crate::modules::timecards::use_cases::record_lines::handler::RecordLinesHandler;
use crate::modules::timecards::use_cases::transition_timesheet::handler::TransitionTimesheetHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub manage_handler: Arc<ManageTimesheetsHandler<InMemoryTimecardStore>>,
    pub lines_handler: Arc<RecordLinesHandler<InMemoryTimecardStore>>,
    pub transition_handler: Arc<TransitionTimesheetHandler<InMemoryTimecardStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryTimecardStore>) -> Self {
        Self {
            manage_handler: Arc::new(ManageTimesheetsHandler::new(store.clone())),
            lines_handler: Arc::new(RecordLinesHandler::new(store.clone())),
            transition_handler: Arc::new(TransitionTimesheetHandler::new(store)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTimecardStore::new()))
    }

    #[cfg(test)]
    pub fn offline() -> Self {
        let mut store = InMemoryTimecardStore::new();
        store.toggle_offline();
        Self::new(Arc::new(store))
    }
}
