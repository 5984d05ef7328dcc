// --- File: crates/twilio_rest/src/verify/messaging_configuration.rs ---
//! Per-country Messaging Service used for SMS verifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MessagingConfigurationInstance {
    pub account_sid: String,
    pub service_sid: String,
    pub country: String,
    #[serde(default)]
    pub messaging_service_sid: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

impl MessagingConfigurationInstance {
    pub fn context(&self, client: &TwilioClient) -> MessagingConfigurationContext {
        MessagingConfigurationContext::new(
            client.clone(),
            self.service_sid.clone(),
            self.country.clone(),
        )
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMessagingConfigurationParams {
    pub country: String,
    pub messaging_service_sid: String,
}

impl CreateMessagingConfigurationParams {
    pub fn new(country: impl Into<String>, messaging_service_sid: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            messaging_service_sid: messaging_service_sid.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateMessagingConfigurationParams {
    pub messaging_service_sid: String,
}

/// `/v2/Services/{ServiceSid}/MessagingConfigurations/{Country}`
#[derive(Debug, Clone)]
pub struct MessagingConfigurationContext {
    client: TwilioClient,
    service_sid: String,
    country: String,
}

impl MessagingConfigurationContext {
    pub(crate) fn new(
        client: TwilioClient,
        service_sid: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
            country: country.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "/v2/Services/{}/MessagingConfigurations/{}",
            encode_segment(&self.service_sid),
            encode_segment(&self.country)
        )
    }

    pub async fn fetch(&self) -> Result<MessagingConfigurationInstance, RestError> {
        self.client.fetch(Domain::Verify, &self.path()).await
    }

    pub async fn update(
        &self,
        params: &UpdateMessagingConfigurationParams,
    ) -> Result<MessagingConfigurationInstance, RestError> {
        self.client.update(Domain::Verify, &self.path(), params).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Verify, &self.path()).await
    }
}

#[derive(Debug, Clone)]
pub struct MessagingConfigurationList {
    client: TwilioClient,
    service_sid: String,
}

impl MessagingConfigurationList {
    pub(crate) fn new(client: TwilioClient, service_sid: impl Into<String>) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
        }
    }

    pub async fn create(
        &self,
        params: &CreateMessagingConfigurationParams,
    ) -> Result<MessagingConfigurationInstance, RestError> {
        self.client
            .create(Domain::Verify, &self.list_path(), params)
            .await
    }

    pub fn get(&self, country: impl Into<String>) -> MessagingConfigurationContext {
        MessagingConfigurationContext::new(self.client.clone(), self.service_sid.clone(), country)
    }
}

impl ListResource for MessagingConfigurationList {
    type Record = MessagingConfigurationInstance;
    type Filter = ();

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Verify
    }

    fn list_path(&self) -> String {
        format!(
            "/v2/Services/{}/MessagingConfigurations",
            encode_segment(&self.service_sid)
        )
    }
}
