// --- File: crates/twilio_rest/src/api/ip_address.rs ---
//! IP addresses inside a SIP IP access control list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account_path;
use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::{encode_segment, rfc2822};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IpAddressInstance {
    pub sid: String,
    pub account_sid: String,
    pub ip_access_control_list_sid: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub cidr_prefix_length: Option<u8>,
    #[serde(default, with = "rfc2822")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, with = "rfc2822")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl IpAddressInstance {
    pub fn context(&self, client: &TwilioClient) -> IpAddressContext {
        IpAddressContext::new(
            client.clone(),
            &self.account_sid,
            self.ip_access_control_list_sid.clone(),
            self.sid.clone(),
        )
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateIpAddressParams {
    pub friendly_name: String,
    pub ip_address: String,
    pub cidr_prefix_length: Option<u8>,
}

impl CreateIpAddressParams {
    pub fn new(friendly_name: impl Into<String>, ip_address: impl Into<String>) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            ip_address: ip_address.into(),
            cidr_prefix_length: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateIpAddressParams {
    pub ip_address: Option<String>,
    pub friendly_name: Option<String>,
    pub cidr_prefix_length: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct IpAddressContext {
    client: TwilioClient,
    account_sid: String,
    ip_access_control_list_sid: String,
    sid: String,
}

impl IpAddressContext {
    pub(crate) fn new(
        client: TwilioClient,
        account_sid: &str,
        ip_access_control_list_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            client,
            account_sid: account_sid.to_string(),
            ip_access_control_list_sid: ip_access_control_list_sid.into(),
            sid: sid.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "{}/SIP/IpAccessControlLists/{}/IpAddresses/{}.json",
            account_path(&self.account_sid),
            encode_segment(&self.ip_access_control_list_sid),
            encode_segment(&self.sid)
        )
    }

    pub async fn fetch(&self) -> Result<IpAddressInstance, RestError> {
        self.client.fetch(Domain::Api, &self.path()).await
    }

    pub async fn update(&self, params: &UpdateIpAddressParams) -> Result<IpAddressInstance, RestError> {
        self.client.update(Domain::Api, &self.path(), params).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Api, &self.path()).await
    }
}

#[derive(Debug, Clone)]
pub struct IpAddressList {
    client: TwilioClient,
    account_sid: String,
    ip_access_control_list_sid: String,
}

impl IpAddressList {
    pub(crate) fn new(
        client: TwilioClient,
        account_sid: &str,
        ip_access_control_list_sid: impl Into<String>,
    ) -> Self {
        Self {
            client,
            account_sid: account_sid.to_string(),
            ip_access_control_list_sid: ip_access_control_list_sid.into(),
        }
    }

    pub async fn create(&self, params: &CreateIpAddressParams) -> Result<IpAddressInstance, RestError> {
        self.client
            .create(Domain::Api, &self.list_path(), params)
            .await
    }

    pub fn get(&self, sid: impl Into<String>) -> IpAddressContext {
        IpAddressContext::new(
            self.client.clone(),
            &self.account_sid,
            self.ip_access_control_list_sid.clone(),
            sid,
        )
    }
}

impl ListResource for IpAddressList {
    type Record = IpAddressInstance;
    type Filter = ();

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Api
    }

    fn list_path(&self) -> String {
        format!(
            "{}/SIP/IpAccessControlLists/{}/IpAddresses.json",
            account_path(&self.account_sid),
            encode_segment(&self.ip_access_control_list_sid)
        )
    }
}
