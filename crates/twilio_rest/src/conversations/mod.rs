// --- File: crates/twilio_rest/src/conversations/mod.rs ---
//! Conversations v1 (`conversations.twilio.com/v1`).

pub mod configuration;
pub mod delivery_receipt;
pub mod webhook;

use crate::client::TwilioClient;

use configuration::ConfigurationContext;
use delivery_receipt::{DeliveryReceiptContext, DeliveryReceiptList};
use webhook::WebhookContext;

#[derive(Debug, Clone)]
pub struct ConversationsV1 {
    client: TwilioClient,
}

impl ConversationsV1 {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    /// Account-wide defaults (singleton).
    pub fn configuration(&self) -> ConfigurationContext {
        ConfigurationContext::new(self.client.clone())
    }

    /// Account-wide webhook settings (singleton).
    pub fn webhook(&self) -> WebhookContext {
        WebhookContext::new(self.client.clone())
    }

    pub fn delivery_receipts(
        &self,
        conversation_sid: impl Into<String>,
        message_sid: impl Into<String>,
    ) -> DeliveryReceiptList {
        DeliveryReceiptList::new(self.client.clone(), conversation_sid, message_sid)
    }

    pub fn delivery_receipt(
        &self,
        conversation_sid: impl Into<String>,
        message_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> DeliveryReceiptContext {
        DeliveryReceiptContext::new(self.client.clone(), conversation_sid, message_sid, sid)
    }
}
