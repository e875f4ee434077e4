// Create event command handler.
//
// Responsibilities
// - Turn the command into an Event record and append it to the events store.

use crate::modules::scheduling::core::records::Event;
use crate::modules::scheduling::use_cases::create_event::command::CreateEvent;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct CreateEventHandler<TEvents>
where
    TEvents: RecordStore<Event> + 'static,
{
    events: Arc<TEvents>,
}

impl<TEvents> CreateEventHandler<TEvents>
where
    TEvents: RecordStore<Event> + 'static,
{
    pub fn new(events: Arc<TEvents>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        let event = self.events.append(Event::new(command.name), &()).await?;
        tracing::info!(event = %event.name, "event created");
        Ok(event)
    }
}
