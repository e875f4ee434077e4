// Print talks query handler.
//
// Responsibilities
// - Fetch the talks of one event and order them by start time.
// - An event without talks is reported as an error, so nothing gets printed.

use crate::modules::scheduling::core::clock::ReferenceDate;
use crate::modules::scheduling::core::records::{Talk, TalkAttribute};
use crate::modules::scheduling::core::schedule::Schedule;
use crate::modules::scheduling::use_cases::errors::ApplicationError;
use crate::modules::scheduling::use_cases::print_talks::command::PrintTalks;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTalk {
    pub talk: Talk,
    pub schedule: Schedule,
}

pub struct PrintTalksHandler<TTalks>
where
    TTalks: RecordStore<Talk> + 'static,
{
    talks: Arc<TTalks>,
    reference: ReferenceDate,
}

impl<TTalks> PrintTalksHandler<TTalks>
where
    TTalks: RecordStore<Talk> + 'static,
{
    pub fn new(talks: Arc<TTalks>, reference: ReferenceDate) -> Self {
        Self { talks, reference }
    }

    pub async fn handle(&self, query: PrintTalks) -> Result<Vec<ScheduledTalk>, ApplicationError> {
        let talks = self
            .talks
            .where_eq(TalkAttribute::EventName, &query.event_name)
            .await;
        if talks.is_empty() {
            return Err(ApplicationError::NoTalks {
                event_name: query.event_name,
            });
        }

        // Stored talks were admitted with understood times.
        let mut scheduled: Vec<ScheduledTalk> = talks
            .into_iter()
            .filter_map(|talk| {
                talk.schedule(&self.reference)
                    .map(|schedule| ScheduledTalk { talk, schedule })
            })
            .collect();
        scheduled.sort_by_key(|entry| entry.schedule.start);
        Ok(scheduled)
    }
}
