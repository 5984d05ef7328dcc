// --- File: crates/twilio_rest/src/conversations/webhook.rs ---
//! Account-level pre/post event webhooks for Conversations.

use serde::{Deserialize, Serialize};

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;

const PATH: &str = "/v1/Configuration/Webhooks";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookTarget {
    Webhook,
    Flex,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WebhookInstance {
    pub account_sid: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default, deserialize_with = "crate::serialize::null_as_empty")]
    pub filters: Vec<String>,
    #[serde(default)]
    pub pre_webhook_url: Option<String>,
    #[serde(default)]
    pub post_webhook_url: Option<String>,
    #[serde(default)]
    pub target: Option<WebhookTarget>,
    #[serde(default)]
    pub url: Option<String>,
}

impl WebhookInstance {
    pub fn context(&self, client: &TwilioClient) -> WebhookContext {
        WebhookContext::new(client.clone())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateWebhookParams {
    pub method: Option<String>,
    /// Event types to deliver (`onMessageAdded`, ...), one `Filters` entry each.
    pub filters: Vec<String>,
    pub pre_webhook_url: Option<String>,
    pub post_webhook_url: Option<String>,
    pub target: Option<WebhookTarget>,
}

/// `/v1/Configuration/Webhooks`
#[derive(Debug, Clone)]
pub struct WebhookContext {
    client: TwilioClient,
}

impl WebhookContext {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub async fn fetch(&self) -> Result<WebhookInstance, RestError> {
        self.client.fetch(Domain::Conversations, PATH).await
    }

    pub async fn update(&self, params: &UpdateWebhookParams) -> Result<WebhookInstance, RestError> {
        self.client.update(Domain::Conversations, PATH, params).await
    }
}
