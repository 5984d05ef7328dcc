// --- File: crates/twilio_rest/src/verify/verification.rs ---
//! One-time-passcode verifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationChannel {
    Sms,
    Call,
    Email,
    Whatsapp,
    Sna,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Canceled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VerificationInstance {
    pub sid: String,
    pub service_sid: String,
    pub account_sid: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub channel: Option<VerificationChannel>,
    #[serde(default)]
    pub status: Option<VerificationStatus>,
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub lookup: Option<Value>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub payee: Option<String>,
    #[serde(default, deserialize_with = "crate::serialize::null_as_empty")]
    pub send_code_attempts: Vec<Value>,
    #[serde(default)]
    pub sna: Option<Value>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

impl VerificationInstance {
    pub fn context(&self, client: &TwilioClient) -> VerificationContext {
        VerificationContext::new(client.clone(), self.service_sid.clone(), self.sid.clone())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVerificationParams {
    pub to: String,
    pub channel: VerificationChannel,
    pub custom_friendly_name: Option<String>,
    pub custom_message: Option<String>,
    pub send_digits: Option<String>,
    pub locale: Option<String>,
    pub custom_code: Option<String>,
    pub amount: Option<String>,
    pub payee: Option<String>,
    /// Rate-limit bucket values, sent as JSON text.
    pub rate_limits: Option<Value>,
    pub channel_configuration: Option<Value>,
    pub app_hash: Option<String>,
    pub template_sid: Option<String>,
    pub template_custom_substitutions: Option<String>,
    pub device_ip: Option<String>,
}

impl CreateVerificationParams {
    pub fn new(to: impl Into<String>, channel: VerificationChannel) -> Self {
        Self {
            to: to.into(),
            channel,
            custom_friendly_name: None,
            custom_message: None,
            send_digits: None,
            locale: None,
            custom_code: None,
            amount: None,
            payee: None,
            rate_limits: None,
            channel_configuration: None,
            app_hash: None,
            template_sid: None,
            template_custom_substitutions: None,
            device_ip: None,
        }
    }
}

/// Only `canceled` and `approved` are accepted by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateVerificationParams {
    pub status: VerificationStatus,
}

/// `/v2/Services/{ServiceSid}/Verifications/{Sid}`
#[derive(Debug, Clone)]
pub struct VerificationContext {
    client: TwilioClient,
    service_sid: String,
    sid: String,
}

impl VerificationContext {
    pub(crate) fn new(client: TwilioClient, service_sid: impl Into<String>, sid: impl Into<String>) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
            sid: sid.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "/v2/Services/{}/Verifications/{}",
            encode_segment(&self.service_sid),
            encode_segment(&self.sid)
        )
    }

    pub async fn fetch(&self) -> Result<VerificationInstance, RestError> {
        self.client.fetch(Domain::Verify, &self.path()).await
    }

    pub async fn update(
        &self,
        params: &UpdateVerificationParams,
    ) -> Result<VerificationInstance, RestError> {
        self.client.update(Domain::Verify, &self.path(), params).await
    }
}

/// `/v2/Services/{ServiceSid}/Verifications`. Create-only; there is no listing.
#[derive(Debug, Clone)]
pub struct VerificationList {
    client: TwilioClient,
    service_sid: String,
}

impl VerificationList {
    pub(crate) fn new(client: TwilioClient, service_sid: impl Into<String>) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
        }
    }

    #[instrument(skip(self, params), fields(channel = ?params.channel))]
    pub async fn create(
        &self,
        params: &CreateVerificationParams,
    ) -> Result<VerificationInstance, RestError> {
        let path = format!(
            "/v2/Services/{}/Verifications",
            encode_segment(&self.service_sid)
        );
        let verification: VerificationInstance =
            self.client.create(Domain::Verify, &path, params).await?;
        info!("Verification {} started", verification.sid);
        Ok(verification)
    }

    pub fn get(&self, sid: impl Into<String>) -> VerificationContext {
        VerificationContext::new(self.client.clone(), self.service_sid.clone(), sid)
    }
}
