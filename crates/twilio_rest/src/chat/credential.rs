// --- File: crates/twilio_rest/src/chat/credential.rs ---
//! Push notification credentials (APN / GCM / FCM).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    Gcm,
    Apn,
    Fcm,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CredentialInstance {
    pub sid: String,
    pub account_sid: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(rename = "type", default)]
    pub credential_type: Option<CredentialType>,
    #[serde(default)]
    pub sandbox: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

impl CredentialInstance {
    pub fn context(&self, client: &TwilioClient) -> CredentialContext {
        CredentialContext::new(client.clone(), self.sid.clone())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCredentialParams {
    #[serde(rename = "Type")]
    pub credential_type: CredentialType,
    pub friendly_name: Option<String>,
    /// APN certificate (PEM)
    pub certificate: Option<String>,
    /// APN private key (PEM)
    pub private_key: Option<String>,
    pub sandbox: Option<bool>,
    /// GCM API key
    pub api_key: Option<String>,
    /// FCM server key
    pub secret: Option<String>,
}

impl CreateCredentialParams {
    pub fn new(credential_type: CredentialType) -> Self {
        Self {
            credential_type,
            friendly_name: None,
            certificate: None,
            private_key: None,
            sandbox: None,
            api_key: None,
            secret: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCredentialParams {
    pub friendly_name: Option<String>,
    pub certificate: Option<String>,
    pub private_key: Option<String>,
    pub sandbox: Option<bool>,
    pub api_key: Option<String>,
    pub secret: Option<String>,
}

/// `/v2/Credentials/{Sid}`
#[derive(Debug, Clone)]
pub struct CredentialContext {
    client: TwilioClient,
    sid: String,
}

impl CredentialContext {
    pub(crate) fn new(client: TwilioClient, sid: impl Into<String>) -> Self {
        Self {
            client,
            sid: sid.into(),
        }
    }

    fn path(&self) -> String {
        format!("/v2/Credentials/{}", encode_segment(&self.sid))
    }

    pub async fn fetch(&self) -> Result<CredentialInstance, RestError> {
        self.client.fetch(Domain::Chat, &self.path()).await
    }

    pub async fn update(&self, params: &UpdateCredentialParams) -> Result<CredentialInstance, RestError> {
        self.client.update(Domain::Chat, &self.path(), params).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Chat, &self.path()).await
    }
}

#[derive(Debug, Clone)]
pub struct CredentialList {
    client: TwilioClient,
}

impl CredentialList {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CreateCredentialParams) -> Result<CredentialInstance, RestError> {
        self.client
            .create(Domain::Chat, &self.list_path(), params)
            .await
    }

    pub fn get(&self, sid: impl Into<String>) -> CredentialContext {
        CredentialContext::new(self.client.clone(), sid)
    }
}

impl ListResource for CredentialList {
    type Record = CredentialInstance;
    type Filter = ();

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Chat
    }

    fn list_path(&self) -> String {
        "/v2/Credentials".to_string()
    }
}
