use crate::modules::timecards::adapters::outbound::timecard_store::TimecardStore;
use crate::modules::timecards::adapters::outbound::timecard_store_in_memory::InMemoryTimecardStore;
use crate::modules::timecards::application::errors::ApplicationError;
use crate::modules::timecards::core::actions::{
    Approval, Cancellation, DraftReopen, Submittal, TimecardAction,
};
use crate::modules::timecards::core::decide::DecideError;
use crate::modules::timecards::core::status::TimecardStatus;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::document_line::DocumentLineBuilder;
use crate::tests::fixtures::timecards::{EMPLOYEE, MANAGER};
use std::sync::Arc;

#[tokio::test]
async fn walks_a_timesheet_through_reopen_and_approval() {
    let store = Arc::new(InMemoryTimecardStore::new());
    let state = AppState::new(store.clone());

    let timecard = state.manage_handler.create(EMPLOYEE).await.unwrap();
    let id = timecard.id;

    let submit = || TimecardAction::Submittal(Submittal { person: EMPLOYEE });

    let result = state.transition_handler.apply(id, submit()).await;
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DecideError::EmptyTimecard))
    ));

    state
        .lines_handler
        .add(id, DocumentLineBuilder::new().build())
        .await
        .unwrap();
    state.transition_handler.apply(id, submit()).await.unwrap();

    state
        .transition_handler
        .apply(
            id,
            TimecardAction::DraftReopen(DraftReopen {
                person: EMPLOYEE,
                reason: "forgot monday".into(),
            }),
        )
        .await
        .unwrap();
    state
        .lines_handler
        .add(id, DocumentLineBuilder::new().hours(4.0).build())
        .await
        .unwrap();
    state.transition_handler.apply(id, submit()).await.unwrap();

    let approval = state
        .transition_handler
        .apply(id, TimecardAction::Approval(Approval { person: MANAGER }))
        .await
        .unwrap();

    let stored = store.get(id).await.unwrap();
    assert_eq!(stored.status(), TimecardStatus::Approved);
    assert_eq!(stored.lines().len(), 2);
    let statuses: Vec<TimecardStatus> = stored
        .transitions()
        .iter()
        .map(|t| t.transitioned_to)
        .collect();
    assert_eq!(
        statuses,
        vec![
            TimecardStatus::Draft,
            TimecardStatus::Submitted,
            TimecardStatus::Draft,
            TimecardStatus::Submitted,
            TimecardStatus::Approved,
        ]
    );
    assert_eq!(
        state
            .transition_handler
            .current(id, TimecardStatus::Approved)
            .await
            .unwrap(),
        approval
    );

    let cancel = TimecardAction::Cancellation(Cancellation {
        person: EMPLOYEE,
        reason: String::new(),
    });
    assert!(matches!(
        state.transition_handler.apply(id, cancel).await,
        Err(ApplicationError::Domain(DecideError::InvalidState {
            status: TimecardStatus::Approved
        }))
    ));
    assert!(matches!(
        state.manage_handler.delete(id).await,
        Err(ApplicationError::Domain(DecideError::InvalidState { .. }))
    ));
}
