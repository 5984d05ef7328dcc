// --- File: crates/twilio_rest/src/api/mod.rs ---
//! `api.twilio.com/2010-04-01`: resources scoped under an account.

pub mod ip_address;
pub mod media;
pub mod message;
pub mod payment;

use crate::client::TwilioClient;
use crate::serialize::encode_segment;

use ip_address::{IpAddressContext, IpAddressList};
use media::{MediaContext, MediaList};
use message::{MessageContext, MessageList};
use payment::{PaymentContext, PaymentList};

pub const API_VERSION: &str = "2010-04-01";

/// Entry point for the 2010-04-01 API, bound to one account.
#[derive(Debug, Clone)]
pub struct V2010 {
    client: TwilioClient,
    account_sid: String,
}

impl V2010 {
    pub(crate) fn new(client: TwilioClient) -> Self {
        let account_sid = client.account_sid().to_string();
        Self {
            client,
            account_sid,
        }
    }

    /// Same API scoped to another account, e.g. a subaccount.
    pub fn account(&self, account_sid: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            account_sid: account_sid.into(),
        }
    }

    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    pub fn messages(&self) -> MessageList {
        MessageList::new(self.client.clone(), &self.account_sid)
    }

    pub fn message(&self, sid: impl Into<String>) -> MessageContext {
        MessageContext::new(self.client.clone(), &self.account_sid, sid)
    }

    pub fn media_list(&self, message_sid: impl Into<String>) -> MediaList {
        MediaList::new(self.client.clone(), &self.account_sid, message_sid)
    }

    pub fn media(&self, message_sid: impl Into<String>, sid: impl Into<String>) -> MediaContext {
        MediaContext::new(self.client.clone(), &self.account_sid, message_sid, sid)
    }

    pub fn payments(&self, call_sid: impl Into<String>) -> PaymentList {
        PaymentList::new(self.client.clone(), &self.account_sid, call_sid)
    }

    pub fn payment(&self, call_sid: impl Into<String>, sid: impl Into<String>) -> PaymentContext {
        PaymentContext::new(self.client.clone(), &self.account_sid, call_sid, sid)
    }

    pub fn ip_addresses(&self, ip_access_control_list_sid: impl Into<String>) -> IpAddressList {
        IpAddressList::new(self.client.clone(), &self.account_sid, ip_access_control_list_sid)
    }

    pub fn ip_address(
        &self,
        ip_access_control_list_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> IpAddressContext {
        IpAddressContext::new(
            self.client.clone(),
            &self.account_sid,
            ip_access_control_list_sid,
            sid,
        )
    }
}

/// `/2010-04-01/Accounts/{AccountSid}`
pub(crate) fn account_path(account_sid: &str) -> String {
    format!("/{}/Accounts/{}", API_VERSION, encode_segment(account_sid))
}
