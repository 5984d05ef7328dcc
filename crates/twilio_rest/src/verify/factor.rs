// --- File: crates/twilio_rest/src/verify/factor.rs ---
//! Push / TOTP factors registered for an entity (one end user, by identity).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Unverified,
    Verified,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorType {
    Push,
    Totp,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FactorInstance {
    pub sid: String,
    pub account_sid: String,
    pub service_sid: String,
    pub identity: String,
    #[serde(default)]
    pub entity_sid: Option<String>,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub status: Option<FactorStatus>,
    #[serde(default)]
    pub factor_type: Option<FactorType>,
    #[serde(default)]
    pub config: Option<Value>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

impl FactorInstance {
    pub fn context(&self, client: &TwilioClient) -> FactorContext {
        FactorContext::new(
            client.clone(),
            self.service_sid.clone(),
            self.identity.clone(),
            self.sid.clone(),
        )
    }
}

/// Verifies a new factor (with `AuthPayload`) or changes its settings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateFactorParams {
    #[serde(rename = "AuthPayload")]
    pub auth_payload: Option<String>,
    #[serde(rename = "FriendlyName")]
    pub friendly_name: Option<String>,
    #[serde(rename = "Config.NotificationToken")]
    pub notification_token: Option<String>,
    #[serde(rename = "Config.SdkVersion")]
    pub sdk_version: Option<String>,
    #[serde(rename = "Config.TimeStep")]
    pub time_step: Option<u32>,
    #[serde(rename = "Config.Skew")]
    pub skew: Option<u32>,
    #[serde(rename = "Config.CodeLength")]
    pub code_length: Option<u32>,
    #[serde(rename = "Config.Alg")]
    pub alg: Option<String>,
    #[serde(rename = "Config.NotificationPlatform")]
    pub notification_platform: Option<String>,
}

/// `/v2/Services/{ServiceSid}/Entities/{Identity}/Factors/{Sid}`
#[derive(Debug, Clone)]
pub struct FactorContext {
    client: TwilioClient,
    service_sid: String,
    identity: String,
    sid: String,
}

impl FactorContext {
    pub(crate) fn new(
        client: TwilioClient,
        service_sid: impl Into<String>,
        identity: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
            identity: identity.into(),
            sid: sid.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "{}/{}",
            factors_path(&self.service_sid, &self.identity),
            encode_segment(&self.sid)
        )
    }

    pub async fn fetch(&self) -> Result<FactorInstance, RestError> {
        self.client.fetch(Domain::Verify, &self.path()).await
    }

    pub async fn update(&self, params: &UpdateFactorParams) -> Result<FactorInstance, RestError> {
        self.client.update(Domain::Verify, &self.path(), params).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Verify, &self.path()).await
    }
}

fn factors_path(service_sid: &str, identity: &str) -> String {
    format!(
        "/v2/Services/{}/Entities/{}/Factors",
        encode_segment(service_sid),
        encode_segment(identity)
    )
}

/// Factors are created through the SDKs, so the collection only lists.
#[derive(Debug, Clone)]
pub struct FactorList {
    client: TwilioClient,
    service_sid: String,
    identity: String,
}

impl FactorList {
    pub(crate) fn new(
        client: TwilioClient,
        service_sid: impl Into<String>,
        identity: impl Into<String>,
    ) -> Self {
        Self {
            client,
            service_sid: service_sid.into(),
            identity: identity.into(),
        }
    }

    pub fn get(&self, sid: impl Into<String>) -> FactorContext {
        FactorContext::new(
            self.client.clone(),
            self.service_sid.clone(),
            self.identity.clone(),
            sid,
        )
    }
}

impl ListResource for FactorList {
    type Record = FactorInstance;
    type Filter = ();

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Verify
    }

    fn list_path(&self) -> String {
        factors_path(&self.service_sid, &self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::to_form_pairs;

    #[test]
    fn test_config_keys_are_dotted() {
        let params = UpdateFactorParams {
            time_step: Some(30),
            code_length: Some(6),
            ..Default::default()
        };
        let mut pairs = to_form_pairs(&params).unwrap();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("Config.CodeLength".to_string(), "6".to_string()),
                ("Config.TimeStep".to_string(), "30".to_string()),
            ]
        );
    }

    #[test]
    fn test_identity_is_escaped_in_path() {
        assert_eq!(
            factors_path("VA123", "ff483d1ff591898a9942916050d2ca3f"),
            "/v2/Services/VA123/Entities/ff483d1ff591898a9942916050d2ca3f/Factors"
        );
        assert_eq!(
            factors_path("VA123", "user@example.com"),
            "/v2/Services/VA123/Entities/user%40example.com/Factors"
        );
    }
}
