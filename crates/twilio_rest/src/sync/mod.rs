// --- File: crates/twilio_rest/src/sync/mod.rs ---
//! Sync v1 (`sync.twilio.com/v1`).

pub mod sync_map;

use crate::client::TwilioClient;

use sync_map::{SyncMapContext, SyncMapList};

#[derive(Debug, Clone)]
pub struct SyncV1 {
    client: TwilioClient,
}

impl SyncV1 {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub fn sync_maps(&self, service_sid: impl Into<String>) -> SyncMapList {
        SyncMapList::new(self.client.clone(), service_sid)
    }

    /// `sid` may also be the map's unique name.
    pub fn sync_map(&self, service_sid: impl Into<String>, sid: impl Into<String>) -> SyncMapContext {
        SyncMapContext::new(self.client.clone(), service_sid, sid)
    }
}
