// --- File: crates/twilio_rest/src/wireless/usage_record.rs ---
//! Data and command usage of one SIM. List-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{Domain, TwilioClient};
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hourly,
    Daily,
    All,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UsageRecordInstance {
    pub sim_sid: String,
    pub account_sid: String,
    /// `{ "start": ..., "end": ... }` of the bucket.
    #[serde(default)]
    pub period: Option<Value>,
    #[serde(default)]
    pub commands: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsageRecordFilter {
    pub end: Option<DateTime<Utc>>,
    pub start: Option<DateTime<Utc>>,
    pub granularity: Option<Granularity>,
}

/// `/v1/Sims/{SimSid}/UsageRecords`
#[derive(Debug, Clone)]
pub struct UsageRecordList {
    client: TwilioClient,
    sim_sid: String,
}

impl UsageRecordList {
    pub(crate) fn new(client: TwilioClient, sim_sid: impl Into<String>) -> Self {
        Self {
            client,
            sim_sid: sim_sid.into(),
        }
    }
}

impl ListResource for UsageRecordList {
    type Record = UsageRecordInstance;
    type Filter = UsageRecordFilter;

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Wireless
    }

    fn list_path(&self) -> String {
        format!("/v1/Sims/{}/UsageRecords", encode_segment(&self.sim_sid))
    }
}
