// --- File: crates/twilio_rest/src/insights/mod.rs ---
//! Voice Insights v1 (`insights.twilio.com/v1`).

pub mod call_summaries;

use crate::client::TwilioClient;

use call_summaries::CallSummariesList;

#[derive(Debug, Clone)]
pub struct InsightsV1 {
    client: TwilioClient,
}

impl InsightsV1 {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub fn call_summaries(&self) -> CallSummariesList {
        CallSummariesList::new(self.client.clone())
    }
}
