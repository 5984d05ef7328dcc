// --- File: crates/twilio_rest/src/wireless/sim.rs ---
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::usage_record::UsageRecordList;
use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimStatus {
    New,
    Ready,
    Active,
    Suspended,
    Deactivated,
    Canceled,
    Scheduled,
    Updating,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimInstance {
    pub sid: String,
    pub account_sid: String,
    #[serde(default)]
    pub unique_name: Option<String>,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub rate_plan_sid: Option<String>,
    #[serde(default)]
    pub iccid: Option<String>,
    #[serde(default)]
    pub e_id: Option<String>,
    #[serde(default)]
    pub status: Option<SimStatus>,
    #[serde(default)]
    pub reset_status: Option<String>,
    #[serde(default)]
    pub commands_callback_url: Option<String>,
    #[serde(default)]
    pub commands_callback_method: Option<String>,
    #[serde(default)]
    pub sms_url: Option<String>,
    #[serde(default)]
    pub sms_method: Option<String>,
    #[serde(default)]
    pub sms_fallback_url: Option<String>,
    #[serde(default)]
    pub sms_fallback_method: Option<String>,
    #[serde(default)]
    pub voice_url: Option<String>,
    #[serde(default)]
    pub voice_method: Option<String>,
    #[serde(default)]
    pub voice_fallback_url: Option<String>,
    #[serde(default)]
    pub voice_fallback_method: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub links: Option<Value>,
}

impl SimInstance {
    pub fn context(&self, client: &TwilioClient) -> SimContext {
        SimContext::new(client.clone(), self.sid.clone())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSimParams {
    pub unique_name: Option<String>,
    pub friendly_name: Option<String>,
    pub callback_method: Option<String>,
    pub callback_url: Option<String>,
    pub rate_plan: Option<String>,
    pub status: Option<SimStatus>,
    pub commands_callback_method: Option<String>,
    pub commands_callback_url: Option<String>,
    pub sms_fallback_method: Option<String>,
    pub sms_fallback_url: Option<String>,
    pub sms_method: Option<String>,
    pub sms_url: Option<String>,
    pub voice_fallback_method: Option<String>,
    pub voice_fallback_url: Option<String>,
    pub voice_method: Option<String>,
    pub voice_url: Option<String>,
    /// Only `resetting` is accepted.
    pub reset_status: Option<String>,
    /// Moves the SIM to another (sub)account.
    pub account_sid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimFilter {
    pub status: Option<SimStatus>,
    pub iccid: Option<String>,
    pub rate_plan: Option<String>,
    #[serde(rename = "EId")]
    pub e_id: Option<String>,
    pub sim_registration_code: Option<String>,
}

/// `/v1/Sims/{Sid}`
#[derive(Debug, Clone)]
pub struct SimContext {
    client: TwilioClient,
    sid: String,
}

impl SimContext {
    pub(crate) fn new(client: TwilioClient, sid: impl Into<String>) -> Self {
        Self {
            client,
            sid: sid.into(),
        }
    }

    fn path(&self) -> String {
        format!("/v1/Sims/{}", encode_segment(&self.sid))
    }

    pub async fn fetch(&self) -> Result<SimInstance, RestError> {
        self.client.fetch(Domain::Wireless, &self.path()).await
    }

    pub async fn update(&self, params: &UpdateSimParams) -> Result<SimInstance, RestError> {
        self.client.update(Domain::Wireless, &self.path(), params).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Wireless, &self.path()).await
    }

    pub fn usage_records(&self) -> UsageRecordList {
        UsageRecordList::new(self.client.clone(), self.sid.clone())
    }
}

/// `/v1/Sims`. SIMs are provisioned through the console, so there is no create.
#[derive(Debug, Clone)]
pub struct SimList {
    client: TwilioClient,
}

impl SimList {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub fn get(&self, sid: impl Into<String>) -> SimContext {
        SimContext::new(self.client.clone(), sid)
    }
}

impl ListResource for SimList {
    type Record = SimInstance;
    type Filter = SimFilter;

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Wireless
    }

    fn list_path(&self) -> String {
        "/v1/Sims".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::to_form_pairs;

    #[test]
    fn test_filter_names() {
        let filter = SimFilter {
            status: Some(SimStatus::Active),
            e_id: Some("89049032000001000000000000000001".to_string()),
            ..Default::default()
        };
        let mut pairs = to_form_pairs(&filter).unwrap();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("EId".to_string(), "89049032000001000000000000000001".to_string()),
                ("Status".to_string(), "active".to_string()),
            ]
        );
    }
}
