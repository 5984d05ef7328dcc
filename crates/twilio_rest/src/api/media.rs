// --- File: crates/twilio_rest/src/api/media.rs ---
//! Media attached to a message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account_path;
use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::{encode_segment, rfc2822};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MediaInstance {
    pub sid: String,
    pub account_sid: String,
    /// SID of the message the media belongs to.
    pub parent_sid: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default, with = "rfc2822")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, with = "rfc2822")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl MediaInstance {
    pub fn context(&self, client: &TwilioClient) -> MediaContext {
        MediaContext::new(
            client.clone(),
            &self.account_sid,
            self.parent_sid.clone(),
            self.sid.clone(),
        )
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MediaFilter {
    #[serde(rename = "DateCreated")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(rename = "DateCreated<")]
    pub date_created_before: Option<DateTime<Utc>>,
    #[serde(rename = "DateCreated>")]
    pub date_created_after: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct MediaContext {
    client: TwilioClient,
    account_sid: String,
    message_sid: String,
    sid: String,
}

impl MediaContext {
    pub(crate) fn new(
        client: TwilioClient,
        account_sid: &str,
        message_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            client,
            account_sid: account_sid.to_string(),
            message_sid: message_sid.into(),
            sid: sid.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "{}/Messages/{}/Media/{}.json",
            account_path(&self.account_sid),
            encode_segment(&self.message_sid),
            encode_segment(&self.sid)
        )
    }

    pub async fn fetch(&self) -> Result<MediaInstance, RestError> {
        self.client.fetch(Domain::Api, &self.path()).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Api, &self.path()).await
    }
}

#[derive(Debug, Clone)]
pub struct MediaList {
    client: TwilioClient,
    account_sid: String,
    message_sid: String,
}

impl MediaList {
    pub(crate) fn new(client: TwilioClient, account_sid: &str, message_sid: impl Into<String>) -> Self {
        Self {
            client,
            account_sid: account_sid.to_string(),
            message_sid: message_sid.into(),
        }
    }

    pub fn get(&self, sid: impl Into<String>) -> MediaContext {
        MediaContext::new(
            self.client.clone(),
            &self.account_sid,
            self.message_sid.clone(),
            sid,
        )
    }
}

impl ListResource for MediaList {
    type Record = MediaInstance;
    type Filter = MediaFilter;

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Api
    }

    fn list_path(&self) -> String {
        format!(
            "{}/Messages/{}/Media.json",
            account_path(&self.account_sid),
            encode_segment(&self.message_sid)
        )
    }
}
