// --- File: crates/twilio_rest/src/voice/country.rs ---
//! Outbound dialing permissions by country. Read-only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

const PATH: &str = "/v1/DialingPermissions/Countries";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CountryInstance {
    pub iso_code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default, deserialize_with = "crate::serialize::null_as_empty")]
    pub country_codes: Vec<String>,
    #[serde(default)]
    pub low_risk_numbers_enabled: Option<bool>,
    #[serde(default)]
    pub high_risk_special_numbers_enabled: Option<bool>,
    #[serde(default)]
    pub high_risk_tollfraud_numbers_enabled: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub links: Option<Value>,
}

impl CountryInstance {
    pub fn context(&self, client: &TwilioClient) -> CountryContext {
        CountryContext::new(client.clone(), self.iso_code.clone())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountryFilter {
    pub iso_code: Option<String>,
    pub continent: Option<String>,
    /// E.164 prefix without `+`, e.g. `44`.
    pub country_code: Option<String>,
    pub low_risk_numbers_enabled: Option<bool>,
    pub high_risk_special_numbers_enabled: Option<bool>,
    pub high_risk_tollfraud_numbers_enabled: Option<bool>,
}

/// `/v1/DialingPermissions/Countries/{IsoCode}`
#[derive(Debug, Clone)]
pub struct CountryContext {
    client: TwilioClient,
    iso_code: String,
}

impl CountryContext {
    pub(crate) fn new(client: TwilioClient, iso_code: impl Into<String>) -> Self {
        Self {
            client,
            iso_code: iso_code.into(),
        }
    }

    pub async fn fetch(&self) -> Result<CountryInstance, RestError> {
        let path = format!("{}/{}", PATH, encode_segment(&self.iso_code));
        self.client.fetch(Domain::Voice, &path).await
    }
}

#[derive(Debug, Clone)]
pub struct CountryList {
    client: TwilioClient,
}

impl CountryList {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub fn get(&self, iso_code: impl Into<String>) -> CountryContext {
        CountryContext::new(self.client.clone(), iso_code)
    }
}

impl ListResource for CountryList {
    type Record = CountryInstance;
    type Filter = CountryFilter;

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Voice
    }

    fn list_path(&self) -> String {
        PATH.to_string()
    }
}
