// Create talk command handler.
//
// Responsibilities
// - Snapshot the events and speakers the talk refers to.
// - Append the talk. The talks store checks it against the talks already scheduled while
//   holding its write lock, so admission and insertion happen as one step.

use crate::modules::scheduling::core::clock::ReferenceDate;
use crate::modules::scheduling::core::records::{
    Event, EventAttribute, Speaker, SpeakerAttribute, Talk,
};
use crate::modules::scheduling::core::validate_talk::TalkContext;
use crate::modules::scheduling::use_cases::create_talk::command::CreateTalk;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct CreateTalkHandler<TTalks, TEvents, TSpeakers>
where
    TTalks: RecordStore<Talk> + 'static,
    TEvents: RecordStore<Event> + 'static,
    TSpeakers: RecordStore<Speaker> + 'static,
{
    talks: Arc<TTalks>,
    events: Arc<TEvents>,
    speakers: Arc<TSpeakers>,
    reference: ReferenceDate,
}

impl<TTalks, TEvents, TSpeakers> CreateTalkHandler<TTalks, TEvents, TSpeakers>
where
    TTalks: RecordStore<Talk> + 'static,
    TEvents: RecordStore<Event> + 'static,
    TSpeakers: RecordStore<Speaker> + 'static,
{
    pub fn new(
        talks: Arc<TTalks>,
        events: Arc<TEvents>,
        speakers: Arc<TSpeakers>,
        reference: ReferenceDate,
    ) -> Self {
        Self {
            talks,
            events,
            speakers,
            reference,
        }
    }

    pub async fn handle(&self, command: CreateTalk) -> Result<Talk, ApplicationError> {
        let context = TalkContext {
            events: self
                .events
                .where_eq(EventAttribute::Name, &command.event_name)
                .await,
            speakers: self
                .speakers
                .where_eq(SpeakerAttribute::Name, &command.speaker_name)
                .await,
            reference: self.reference,
        };

        match self.talks.append(command.into_record(), &context).await {
            Ok(talk) => {
                tracing::info!(event = %talk.event_name, talk = %talk.name, "talk created");
                Ok(talk)
            }
            Err(error) => {
                tracing::debug!(%error, "talk rejected");
                Err(error.into())
            }
        }
    }
}
