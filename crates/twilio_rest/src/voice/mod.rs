// --- File: crates/twilio_rest/src/voice/mod.rs ---
//! Voice v1 (`voice.twilio.com/v1`).

pub mod country;

use crate::client::TwilioClient;

use country::{CountryContext, CountryList};

#[derive(Debug, Clone)]
pub struct VoiceV1 {
    client: TwilioClient,
}

impl VoiceV1 {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    /// Dialing permissions per destination country.
    pub fn countries(&self) -> CountryList {
        CountryList::new(self.client.clone())
    }

    pub fn country(&self, iso_code: impl Into<String>) -> CountryContext {
        CountryContext::new(self.client.clone(), iso_code)
    }
}
