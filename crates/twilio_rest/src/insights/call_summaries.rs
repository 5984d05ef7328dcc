// --- File: crates/twilio_rest/src/insights/call_summaries.rs ---
//! Account-wide call summaries. List-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{Domain, TwilioClient};
use crate::pagination::ListResource;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CallSummariesInstance {
    pub account_sid: String,
    pub call_sid: String,
    #[serde(default)]
    pub answered_by: Option<String>,
    #[serde(default)]
    pub call_type: Option<String>,
    #[serde(default)]
    pub call_state: Option<String>,
    #[serde(default)]
    pub processing_state: Option<String>,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub connect_duration: Option<i64>,
    #[serde(default)]
    pub from: Option<Value>,
    #[serde(default)]
    pub to: Option<Value>,
    #[serde(default)]
    pub carrier_edge: Option<Value>,
    #[serde(default)]
    pub client_edge: Option<Value>,
    #[serde(default)]
    pub sdk_edge: Option<Value>,
    #[serde(default)]
    pub sip_edge: Option<Value>,
    #[serde(default, deserialize_with = "crate::serialize::null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub attributes: Option<Value>,
    #[serde(default)]
    pub properties: Option<Value>,
    #[serde(default)]
    pub trust: Option<Value>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallSummariesFilter {
    pub from: Option<String>,
    pub to: Option<String>,
    pub from_carrier: Option<String>,
    pub to_carrier: Option<String>,
    pub from_country_code: Option<String>,
    pub to_country_code: Option<String>,
    pub branded: Option<bool>,
    pub verified_caller: Option<bool>,
    pub has_tag: Option<bool>,
    /// Relative (`4h`) or absolute (ISO 8601) start of the window.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub call_type: Option<String>,
    pub call_state: Option<String>,
    pub direction: Option<String>,
    pub processing_state: Option<String>,
    pub sort_by: Option<String>,
    pub subaccount: Option<String>,
    pub abnormal_session: Option<bool>,
}

/// `/v1/Voice/Summaries`
#[derive(Debug, Clone)]
pub struct CallSummariesList {
    client: TwilioClient,
}

impl CallSummariesList {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }
}

impl ListResource for CallSummariesList {
    type Record = CallSummariesInstance;
    type Filter = CallSummariesFilter;

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Insights
    }

    fn list_path(&self) -> String {
        "/v1/Voice/Summaries".to_string()
    }
}
