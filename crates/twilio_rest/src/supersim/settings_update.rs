// --- File: crates/twilio_rest/src/supersim/settings_update.rs ---
//! Over-the-air SIM settings updates. List-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{Domain, TwilioClient};
use crate::pagination::ListResource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingsUpdateStatus {
    Scheduled,
    InProgress,
    Successful,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SettingsUpdateInstance {
    pub sid: String,
    #[serde(default)]
    pub iccid: Option<String>,
    #[serde(default)]
    pub sim_sid: Option<String>,
    #[serde(default)]
    pub status: Option<SettingsUpdateStatus>,
    #[serde(default, deserialize_with = "crate::serialize::null_as_empty")]
    pub packages: Vec<Value>,
    #[serde(default)]
    pub date_completed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettingsUpdateFilter {
    /// SID or ICCID of the Super SIM.
    pub sim: Option<String>,
    pub status: Option<SettingsUpdateStatus>,
}

/// `/v1/SettingsUpdates`
#[derive(Debug, Clone)]
pub struct SettingsUpdateList {
    client: TwilioClient,
}

impl SettingsUpdateList {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }
}

impl ListResource for SettingsUpdateList {
    type Record = SettingsUpdateInstance;
    type Filter = SettingsUpdateFilter;

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Supersim
    }

    fn list_path(&self) -> String {
        "/v1/SettingsUpdates".to_string()
    }
}
