// --- File: crates/twilio_rest/src/events/mod.rs ---
//! Event Streams v1 (`events.twilio.com/v1`).

pub mod subscribed_event;

use crate::client::TwilioClient;

use subscribed_event::{SubscribedEventContext, SubscribedEventList};

#[derive(Debug, Clone)]
pub struct EventsV1 {
    client: TwilioClient,
}

impl EventsV1 {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub fn subscribed_events(&self, subscription_sid: impl Into<String>) -> SubscribedEventList {
        SubscribedEventList::new(self.client.clone(), subscription_sid)
    }

    pub fn subscribed_event(
        &self,
        subscription_sid: impl Into<String>,
        event_type: impl Into<String>,
    ) -> SubscribedEventContext {
        SubscribedEventContext::new(self.client.clone(), subscription_sid, event_type)
    }
}
