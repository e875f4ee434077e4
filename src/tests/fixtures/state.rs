use crate::modules::scheduling::core::records::{Event, Speaker};
use crate::shared::infrastructure::record_store::RecordStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::talks::reference_date;

pub fn empty_state() -> AppState {
    AppState::in_memory(reference_date())
}

/// State that already knows the event "an_event" and the speaker "John".
pub async fn seeded_state() -> AppState {
    let state = empty_state();
    state.events.append(Event::new("an_event"), &()).await.unwrap();
    state.speakers.append(Speaker::new("John"), &()).await.unwrap();
    state
}
