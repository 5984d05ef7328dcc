// --- File: crates/twilio_rest/src/supersim/mod.rs ---
//! Super SIM v1 (`supersim.twilio.com/v1`).

pub mod settings_update;

use crate::client::TwilioClient;

use settings_update::SettingsUpdateList;

#[derive(Debug, Clone)]
pub struct SupersimV1 {
    client: TwilioClient,
}

impl SupersimV1 {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub fn settings_updates(&self) -> SettingsUpdateList {
        SettingsUpdateList::new(self.client.clone())
    }
}
