// --- File: crates/twilio_rest/src/api/message.rs ---
//! Programmable Messaging messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use super::account_path;
use super::media::{MediaContext, MediaList};
use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::{encode_segment, rfc2822};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageStatus {
    Queued,
    Sending,
    Sent,
    Failed,
    Delivered,
    Undelivered,
    Receiving,
    Received,
    Accepted,
    Scheduled,
    Read,
    PartiallyDelivered,
    Canceled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageDirection {
    Inbound,
    OutboundApi,
    OutboundCall,
    OutboundReply,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MessageInstance {
    pub sid: String,
    pub account_sid: String,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub status: Option<MessageStatus>,
    #[serde(default)]
    pub direction: Option<MessageDirection>,
    #[serde(default)]
    pub messaging_service_sid: Option<String>,
    #[serde(default)]
    pub num_media: Option<String>,
    #[serde(default)]
    pub num_segments: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub price_unit: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, with = "rfc2822")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, with = "rfc2822")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, with = "rfc2822")]
    pub date_sent: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub subresource_uris: Option<Value>,
}

impl MessageInstance {
    pub fn context(&self, client: &TwilioClient) -> MessageContext {
        MessageContext::new(client.clone(), &self.account_sid, self.sid.clone())
    }
}

/// Parameters for sending a message. `To` plus one of `From` / `MessagingServiceSid`
/// and one of `Body` / `MediaUrl` / `ContentSid` are required by Twilio.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMessageParams {
    pub to: String,
    pub from: Option<String>,
    pub messaging_service_sid: Option<String>,
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub media_url: Vec<String>,
    pub content_sid: Option<String>,
    pub content_variables: Option<String>,
    pub status_callback: Option<String>,
    pub application_sid: Option<String>,
    pub max_price: Option<String>,
    pub provide_feedback: Option<bool>,
    pub attempt: Option<u32>,
    pub validity_period: Option<u32>,
    pub force_delivery: Option<bool>,
    pub smart_encoded: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub persistent_action: Vec<String>,
    pub shorten_urls: Option<bool>,
    pub schedule_type: Option<String>,
    pub send_at: Option<DateTime<Utc>>,
    pub send_as_mms: Option<bool>,
}

impl CreateMessageParams {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            ..Default::default()
        }
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn messaging_service_sid(mut self, sid: impl Into<String>) -> Self {
        self.messaging_service_sid = Some(sid.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url.push(url.into());
        self
    }

    pub fn status_callback(mut self, url: impl Into<String>) -> Self {
        self.status_callback = Some(url.into());
        self
    }
}

/// Redacts a message body or cancels a scheduled message.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateMessageParams {
    pub body: Option<String>,
    pub status: Option<MessageStatus>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageFilter {
    #[serde(rename = "To")]
    pub to: Option<String>,
    #[serde(rename = "From")]
    pub from: Option<String>,
    #[serde(rename = "DateSent")]
    pub date_sent: Option<DateTime<Utc>>,
    #[serde(rename = "DateSent<")]
    pub date_sent_before: Option<DateTime<Utc>>,
    #[serde(rename = "DateSent>")]
    pub date_sent_after: Option<DateTime<Utc>>,
}

/// A single message: `/2010-04-01/Accounts/{AccountSid}/Messages/{Sid}.json`
#[derive(Debug, Clone)]
pub struct MessageContext {
    client: TwilioClient,
    account_sid: String,
    sid: String,
}

impl MessageContext {
    pub(crate) fn new(client: TwilioClient, account_sid: &str, sid: impl Into<String>) -> Self {
        Self {
            client,
            account_sid: account_sid.to_string(),
            sid: sid.into(),
        }
    }

    pub fn sid(&self) -> &str {
        &self.sid
    }

    fn path(&self) -> String {
        format!(
            "{}/Messages/{}.json",
            account_path(&self.account_sid),
            encode_segment(&self.sid)
        )
    }

    pub async fn fetch(&self) -> Result<MessageInstance, RestError> {
        self.client.fetch(Domain::Api, &self.path()).await
    }

    pub async fn update(&self, params: &UpdateMessageParams) -> Result<MessageInstance, RestError> {
        self.client.update(Domain::Api, &self.path(), params).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Api, &self.path()).await
    }

    pub fn media_list(&self) -> MediaList {
        MediaList::new(self.client.clone(), &self.account_sid, self.sid.clone())
    }

    pub fn media(&self, sid: impl Into<String>) -> MediaContext {
        MediaContext::new(self.client.clone(), &self.account_sid, self.sid.clone(), sid)
    }
}

/// `/2010-04-01/Accounts/{AccountSid}/Messages.json`
#[derive(Debug, Clone)]
pub struct MessageList {
    client: TwilioClient,
    account_sid: String,
}

impl MessageList {
    pub(crate) fn new(client: TwilioClient, account_sid: &str) -> Self {
        Self {
            client,
            account_sid: account_sid.to_string(),
        }
    }

    #[instrument(skip(self, params), fields(to = %params.to))]
    pub async fn create(&self, params: &CreateMessageParams) -> Result<MessageInstance, RestError> {
        let message: MessageInstance = self
            .client
            .create(Domain::Api, &self.list_path(), params)
            .await?;
        info!("Message {} created with status {:?}", message.sid, message.status);
        Ok(message)
    }

    pub fn get(&self, sid: impl Into<String>) -> MessageContext {
        MessageContext::new(self.client.clone(), &self.account_sid, sid)
    }
}

impl ListResource for MessageList {
    type Record = MessageInstance;
    type Filter = MessageFilter;

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Api
    }

    fn list_path(&self) -> String {
        format!("{}/Messages.json", account_path(&self.account_sid))
    }
}
