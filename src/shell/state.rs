use crate::modules::scheduling::core::clock::ReferenceDate;
use crate::modules::scheduling::core::records::{Event, Speaker, Talk};
use crate::modules::scheduling::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::scheduling::use_cases::create_speaker::handler::CreateSpeakerHandler;
use crate::modules::scheduling::use_cases::create_talk::handler::CreateTalkHandler;
use crate::modules::scheduling::use_cases::print_talks::handler::PrintTalksHandler;
use crate::shared::infrastructure::record_store::RecordStore;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

pub type EventStore = InMemoryRecordStore<Event>;
pub type SpeakerStore = InMemoryRecordStore<Speaker>;
pub type TalkStore = InMemoryRecordStore<Talk>;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventStore>,
    pub speakers: Arc<SpeakerStore>,
    pub talks: Arc<TalkStore>,
    pub create_event: Arc<CreateEventHandler<EventStore>>,
    pub create_speaker: Arc<CreateSpeakerHandler<SpeakerStore>>,
    pub create_talk: Arc<CreateTalkHandler<TalkStore, EventStore, SpeakerStore>>,
    pub print_talks: Arc<PrintTalksHandler<TalkStore>>,
}

impl AppState {
    pub fn in_memory(reference: ReferenceDate) -> Self {
        let events = Arc::new(EventStore::new());
        let speakers = Arc::new(SpeakerStore::new());
        let talks = Arc::new(TalkStore::new());

        Self {
            create_event: Arc::new(CreateEventHandler::new(events.clone())),
            create_speaker: Arc::new(CreateSpeakerHandler::new(speakers.clone())),
            create_talk: Arc::new(CreateTalkHandler::new(
                talks.clone(),
                events.clone(),
                speakers.clone(),
                reference,
            )),
            print_talks: Arc::new(PrintTalksHandler::new(talks.clone(), reference)),
            events,
            speakers,
            talks,
        }
    }

    /// Forget every record. Not reachable from any command.
    pub async fn reset(&self) {
        self.talks.clear().await;
        self.speakers.clear().await;
        self.events.clear().await;
        tracing::info!("state reset");
    }
}
