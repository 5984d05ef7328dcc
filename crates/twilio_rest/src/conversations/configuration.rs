// --- File: crates/twilio_rest/src/conversations/configuration.rs ---
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;

const PATH: &str = "/v1/Configuration";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ConfigurationInstance {
    pub account_sid: String,
    #[serde(default)]
    pub default_chat_service_sid: Option<String>,
    #[serde(default)]
    pub default_messaging_service_sid: Option<String>,
    /// ISO 8601 duration after which an idle conversation becomes `inactive`.
    #[serde(default)]
    pub default_inactive_timer: Option<String>,
    /// ISO 8601 duration after which an idle conversation is `closed`.
    #[serde(default)]
    pub default_closed_timer: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub links: Option<Value>,
}

impl ConfigurationInstance {
    pub fn context(&self, client: &TwilioClient) -> ConfigurationContext {
        ConfigurationContext::new(client.clone())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateConfigurationParams {
    pub default_chat_service_sid: Option<String>,
    pub default_messaging_service_sid: Option<String>,
    pub default_inactive_timer: Option<String>,
    pub default_closed_timer: Option<String>,
}

/// `/v1/Configuration`
#[derive(Debug, Clone)]
pub struct ConfigurationContext {
    client: TwilioClient,
}

impl ConfigurationContext {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub async fn fetch(&self) -> Result<ConfigurationInstance, RestError> {
        self.client.fetch(Domain::Conversations, PATH).await
    }

    pub async fn update(
        &self,
        params: &UpdateConfigurationParams,
    ) -> Result<ConfigurationInstance, RestError> {
        self.client.update(Domain::Conversations, PATH, params).await
    }
}
