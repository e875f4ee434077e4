// Create speaker command handler.
//
// Responsibilities
// - Turn the command into a Speaker record and append it to the speakers store.

use crate::modules::scheduling::core::records::Speaker;
use crate::modules::scheduling::use_cases::create_speaker::command::CreateSpeaker;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct CreateSpeakerHandler<TSpeakers>
where
    TSpeakers: RecordStore<Speaker> + 'static,
{
    speakers: Arc<TSpeakers>,
}

impl<TSpeakers> CreateSpeakerHandler<TSpeakers>
where
    TSpeakers: RecordStore<Speaker> + 'static,
{
    pub fn new(speakers: Arc<TSpeakers>) -> Self {
        Self { speakers }
    }

    pub async fn handle(&self, command: CreateSpeaker) -> Result<Speaker, ApplicationError> {
        let speaker = self.speakers.append(Speaker::new(command.name), &()).await?;
        tracing::info!(speaker = %speaker.name, "speaker created");
        Ok(speaker)
    }
}
