// --- File: crates/twilio_rest/src/wireless/mod.rs ---
//! Programmable Wireless v1 (`wireless.twilio.com/v1`).

pub mod sim;
pub mod usage_record;

use crate::client::TwilioClient;

use sim::{SimContext, SimList};
use usage_record::UsageRecordList;

#[derive(Debug, Clone)]
pub struct WirelessV1 {
    client: TwilioClient,
}

impl WirelessV1 {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub fn sims(&self) -> SimList {
        SimList::new(self.client.clone())
    }

    /// `sid` may also be the SIM's unique name.
    pub fn sim(&self, sid: impl Into<String>) -> SimContext {
        SimContext::new(self.client.clone(), sid)
    }

    pub fn usage_records(&self, sim_sid: impl Into<String>) -> UsageRecordList {
        UsageRecordList::new(self.client.clone(), sim_sid)
    }
}
