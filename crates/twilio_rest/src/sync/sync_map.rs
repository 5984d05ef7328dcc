// --- File: crates/twilio_rest/src/sync/sync_map.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SyncMapInstance {
    pub sid: String,
    pub account_sid: String,
    pub service_sid: String,
    #[serde(default)]
    pub unique_name: Option<String>,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub date_expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub links: Option<Value>,
}

impl SyncMapInstance {
    pub fn context(&self, client: &TwilioClient) -> SyncMapContext {
        SyncMapContext::new(client.clone(), self.service_sid.clone(), self.sid.clone())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSyncMapParams {
    pub unique_name: Option<String>,
    /// Seconds until the map expires; 0 keeps it forever.
    pub ttl: Option<u64>,
    pub collection_ttl: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSyncMapParams {
    pub ttl: Option<u64>,
    pub collection_ttl: Option<u64>,
}

/// `/v1/Services/{ServiceSid}/Maps/{Sid}`
#[derive(Debug, Clone)]
pub struct SyncMapContext {
    client: TwilioClient,
    service_sid: String,
    sid: String,
}

impl SyncMapContext {
    pub(crate) fn new(client: TwilioClient, service_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
            sid: sid.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "/v1/Services/{}/Maps/{}",
            encode_segment(&self.service_sid),
            encode_segment(&self.sid)
        )
    }

    pub async fn fetch(&self) -> Result<SyncMapInstance, RestError> {
        self.client.fetch(Domain::Sync, &self.path()).await
    }

    pub async fn update(&self, params: &UpdateSyncMapParams) -> Result<SyncMapInstance, RestError> {
        self.client.update(Domain::Sync, &self.path(), params).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Sync, &self.path()).await
    }
}

#[derive(Debug, Clone)]
pub struct SyncMapList {
    client: TwilioClient,
    service_sid: String,
}

impl SyncMapList {
    pub(crate) fn new(client: TwilioClient, service_sid: impl Into<String>) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
        }
    }

    pub async fn create(&self, params: &CreateSyncMapParams) -> Result<SyncMapInstance, RestError> {
        self.client
            .create(Domain::Sync, &self.list_path(), params)
            .await
    }

    pub fn get(&self, sid: impl Into<String>) -> SyncMapContext {
        SyncMapContext::new(self.client.clone(), self.service_sid.clone(), sid)
    }
}

impl ListResource for SyncMapList {
    type Record = SyncMapInstance;
    type Filter = ();

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Sync
    }

    fn list_path(&self) -> String {
        format!("/v1/Services/{}/Maps", encode_segment(&self.service_sid))
    }
}
