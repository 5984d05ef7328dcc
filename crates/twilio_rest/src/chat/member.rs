// --- File: crates/twilio_rest/src/chat/member.rs ---
//! Channel membership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MemberInstance {
    pub sid: String,
    pub account_sid: String,
    pub service_sid: String,
    pub channel_sid: String,
    #[serde(default)]
    pub identity: Option<String>,
    #[serde(default)]
    pub role_sid: Option<String>,
    #[serde(default)]
    pub last_consumed_message_index: Option<i64>,
    #[serde(default)]
    pub last_consumption_timestamp: Option<DateTime<Utc>>,
    /// Free-form JSON string set by the application.
    #[serde(default)]
    pub attributes: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

impl MemberInstance {
    pub fn context(&self, client: &TwilioClient) -> MemberContext {
        MemberContext::new(
            client.clone(),
            self.service_sid.clone(),
            self.channel_sid.clone(),
            self.sid.clone(),
        )
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMemberParams {
    pub identity: String,
    pub role_sid: Option<String>,
    pub last_consumed_message_index: Option<i64>,
    pub last_consumption_timestamp: Option<DateTime<Utc>>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    pub attributes: Option<String>,
}

impl CreateMemberParams {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateMemberParams {
    pub role_sid: Option<String>,
    pub last_consumed_message_index: Option<i64>,
    pub last_consumption_timestamp: Option<DateTime<Utc>>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    pub attributes: Option<String>,
}

/// Restricts the listing to the given identities.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemberFilter {
    #[serde(rename = "Identity")]
    pub identity: Vec<String>,
}

/// `/v2/Services/{ServiceSid}/Channels/{ChannelSid}/Members/{Sid}`
#[derive(Debug, Clone)]
pub struct MemberContext {
    client: TwilioClient,
    service_sid: String,
    channel_sid: String,
    sid: String,
}

impl MemberContext {
    pub(crate) fn new(
        client: TwilioClient,
        service_sid: impl Into<String>,
        channel_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
            channel_sid: channel_sid.into(),
            sid: sid.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "/v2/Services/{}/Channels/{}/Members/{}",
            encode_segment(&self.service_sid),
            encode_segment(&self.channel_sid),
            encode_segment(&self.sid)
        )
    }

    pub async fn fetch(&self) -> Result<MemberInstance, RestError> {
        self.client.fetch(Domain::Chat, &self.path()).await
    }

    pub async fn update(&self, params: &UpdateMemberParams) -> Result<MemberInstance, RestError> {
        self.client.update(Domain::Chat, &self.path(), params).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Chat, &self.path()).await
    }
}

#[derive(Debug, Clone)]
pub struct MemberList {
    client: TwilioClient,
    service_sid: String,
    channel_sid: String,
}

impl MemberList {
    pub(crate) fn new(
        client: TwilioClient,
        service_sid: impl Into<String>,
        channel_sid: impl Into<String>,
    ) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
            channel_sid: channel_sid.into(),
        }
    }

    pub async fn create(&self, params: &CreateMemberParams) -> Result<MemberInstance, RestError> {
        self.client
            .create(Domain::Chat, &self.list_path(), params)
            .await
    }

    pub fn get(&self, sid: impl Into<String>) -> MemberContext {
        MemberContext::new(
            self.client.clone(),
            self.service_sid.clone(),
            self.channel_sid.clone(),
            sid,
        )
    }
}

impl ListResource for MemberList {
    type Record = MemberInstance;
    type Filter = MemberFilter;

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Chat
    }

    fn list_path(&self) -> String {
        format!(
            "/v2/Services/{}/Channels/{}/Members",
            encode_segment(&self.service_sid),
            encode_segment(&self.channel_sid)
        )
    }
}
