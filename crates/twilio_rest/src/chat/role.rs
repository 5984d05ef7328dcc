// --- File: crates/twilio_rest/src/chat/role.rs ---
//! Roles and their permission sets within a chat service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Channel,
    Deployment,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RoleInstance {
    pub sid: String,
    pub account_sid: String,
    pub service_sid: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(rename = "type", default)]
    pub role_type: Option<RoleType>,
    #[serde(default, deserialize_with = "crate::serialize::null_as_empty")]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RoleInstance {
    pub fn context(&self, client: &TwilioClient) -> RoleContext {
        RoleContext::new(client.clone(), self.service_sid.clone(), self.sid.clone())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRoleParams {
    pub friendly_name: String,
    #[serde(rename = "Type")]
    pub role_type: RoleType,
    /// Sent as one `Permission` entry per value.
    pub permission: Vec<String>,
}

impl CreateRoleParams {
    pub fn new(friendly_name: impl Into<String>, role_type: RoleType, permission: Vec<String>) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            role_type,
            permission,
        }
    }
}

/// Replaces the role's permissions.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRoleParams {
    pub permission: Vec<String>,
}

/// `/v2/Services/{ServiceSid}/Roles/{Sid}`
#[derive(Debug, Clone)]
pub struct RoleContext {
    client: TwilioClient,
    service_sid: String,
    sid: String,
}

impl RoleContext {
    pub(crate) fn new(client: TwilioClient, service_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
            sid: sid.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "/v2/Services/{}/Roles/{}",
            encode_segment(&self.service_sid),
            encode_segment(&self.sid)
        )
    }

    pub async fn fetch(&self) -> Result<RoleInstance, RestError> {
        self.client.fetch(Domain::Chat, &self.path()).await
    }

    pub async fn update(&self, params: &UpdateRoleParams) -> Result<RoleInstance, RestError> {
        self.client.update(Domain::Chat, &self.path(), params).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Chat, &self.path()).await
    }
}

#[derive(Debug, Clone)]
pub struct RoleList {
    client: TwilioClient,
    service_sid: String,
}

impl RoleList {
    pub(crate) fn new(client: TwilioClient, service_sid: impl Into<String>) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
        }
    }

    pub async fn create(&self, params: &CreateRoleParams) -> Result<RoleInstance, RestError> {
        self.client
            .create(Domain::Chat, &self.list_path(), params)
            .await
    }

    pub fn get(&self, sid: impl Into<String>) -> RoleContext {
        RoleContext::new(self.client.clone(), self.service_sid.clone(), sid)
    }
}

impl ListResource for RoleList {
    type Record = RoleInstance;
    type Filter = ();

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Chat
    }

    fn list_path(&self) -> String {
        format!("/v2/Services/{}/Roles", encode_segment(&self.service_sid))
    }
}
