// --- File: crates/twilio_rest/src/conversations/delivery_receipt.rs ---
//! Per-participant delivery receipts of a conversation message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Read,
    Failed,
    Delivered,
    Undelivered,
    Sent,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeliveryReceiptInstance {
    pub sid: String,
    pub account_sid: String,
    pub conversation_sid: String,
    pub message_sid: String,
    #[serde(default)]
    pub channel_message_sid: Option<String>,
    #[serde(default)]
    pub participant_sid: Option<String>,
    #[serde(default)]
    pub status: Option<DeliveryStatus>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

impl DeliveryReceiptInstance {
    pub fn context(&self, client: &TwilioClient) -> DeliveryReceiptContext {
        DeliveryReceiptContext::new(
            client.clone(),
            self.conversation_sid.clone(),
            self.message_sid.clone(),
            self.sid.clone(),
        )
    }
}

fn receipts_path(conversation_sid: &str, message_sid: &str) -> String {
    format!(
        "/v1/Conversations/{}/Messages/{}/Receipts",
        encode_segment(conversation_sid),
        encode_segment(message_sid)
    )
}

/// `/v1/Conversations/{ConversationSid}/Messages/{MessageSid}/Receipts/{Sid}`
#[derive(Debug, Clone)]
pub struct DeliveryReceiptContext {
    client: TwilioClient,
    conversation_sid: String,
    message_sid: String,
    sid: String,
}

impl DeliveryReceiptContext {
    pub(crate) fn new(
        client: TwilioClient,
        conversation_sid: impl Into<String>,
        message_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            client,
            conversation_sid: conversation_sid.into(),
            message_sid: message_sid.into(),
            sid: sid.into(),
        }
    }

    pub async fn fetch(&self) -> Result<DeliveryReceiptInstance, RestError> {
        let path = format!(
            "{}/{}",
            receipts_path(&self.conversation_sid, &self.message_sid),
            encode_segment(&self.sid)
        );
        self.client.fetch(Domain::Conversations, &path).await
    }
}

#[derive(Debug, Clone)]
pub struct DeliveryReceiptList {
    client: TwilioClient,
    conversation_sid: String,
    message_sid: String,
}

impl DeliveryReceiptList {
    pub(crate) fn new(
        client: TwilioClient,
        conversation_sid: impl Into<String>,
        message_sid: impl Into<String>,
    ) -> Self {
        Self {
            client,
            conversation_sid: conversation_sid.into(),
            message_sid: message_sid.into(),
        }
    }

    pub fn get(&self, sid: impl Into<String>) -> DeliveryReceiptContext {
        DeliveryReceiptContext::new(
            self.client.clone(),
            self.conversation_sid.clone(),
            self.message_sid.clone(),
            sid,
        )
    }
}

impl ListResource for DeliveryReceiptList {
    type Record = DeliveryReceiptInstance;
    type Filter = ();

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Conversations
    }

    fn list_path(&self) -> String {
        receipts_path(&self.conversation_sid, &self.message_sid)
    }
}
