// --- File: crates/twilio_rest/src/chat/mod.rs ---
//! Programmable Chat v2 (`chat.twilio.com/v2`).

pub mod credential;
pub mod member;
pub mod role;

use crate::client::TwilioClient;

use credential::{CredentialContext, CredentialList};
use member::{MemberContext, MemberList};
use role::{RoleContext, RoleList};

#[derive(Debug, Clone)]
pub struct ChatV2 {
    client: TwilioClient,
}

impl ChatV2 {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub fn credentials(&self) -> CredentialList {
        CredentialList::new(self.client.clone())
    }

    pub fn credential(&self, sid: impl Into<String>) -> CredentialContext {
        CredentialContext::new(self.client.clone(), sid)
    }

    pub fn roles(&self, service_sid: impl Into<String>) -> RoleList {
        RoleList::new(self.client.clone(), service_sid)
    }

    pub fn role(&self, service_sid: impl Into<String>, sid: impl Into<String>) -> RoleContext {
        RoleContext::new(self.client.clone(), service_sid, sid)
    }

    pub fn members(&self, service_sid: impl Into<String>, channel_sid: impl Into<String>) -> MemberList {
        MemberList::new(self.client.clone(), service_sid, channel_sid)
    }

    pub fn member(
        &self,
        service_sid: impl Into<String>,
        channel_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> MemberContext {
        MemberContext::new(self.client.clone(), service_sid, channel_sid, sid)
    }
}
