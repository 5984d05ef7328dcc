// --- File: crates/twilio_rest/src/events/subscribed_event.rs ---
//! Event types a subscription delivers, keyed by event type name
//! (`com.twilio.messaging.message.delivered`, ...).

use serde::{Deserialize, Serialize};

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::pagination::ListResource;
use crate::serialize::encode_segment;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubscribedEventInstance {
    pub account_sid: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub subscription_sid: String,
    #[serde(default)]
    pub schema_version: Option<u32>,
    #[serde(default)]
    pub url: Option<String>,
}

impl SubscribedEventInstance {
    pub fn context(&self, client: &TwilioClient) -> SubscribedEventContext {
        SubscribedEventContext::new(
            client.clone(),
            self.subscription_sid.clone(),
            self.event_type.clone(),
        )
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSubscribedEventParams {
    #[serde(rename = "Type")]
    pub event_type: String,
    pub schema_version: Option<u32>,
}

impl CreateSubscribedEventParams {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            schema_version: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSubscribedEventParams {
    pub schema_version: Option<u32>,
}

/// `/v1/Subscriptions/{SubscriptionSid}/SubscribedEvents/{Type}`
#[derive(Debug, Clone)]
pub struct SubscribedEventContext {
    client: TwilioClient,
    subscription_sid: String,
    event_type: String,
}

impl SubscribedEventContext {
    pub(crate) fn new(
        client: TwilioClient,
        subscription_sid: impl Into<String>,
        event_type: impl Into<String>,
    ) -> Self {
        Self {
            client,
            subscription_sid: subscription_sid.into(),
            event_type: event_type.into(),
        }
    }

    fn path(&self) -> String {
        format!(
            "/v1/Subscriptions/{}/SubscribedEvents/{}",
            encode_segment(&self.subscription_sid),
            encode_segment(&self.event_type)
        )
    }

    pub async fn fetch(&self) -> Result<SubscribedEventInstance, RestError> {
        self.client.fetch(Domain::Events, &self.path()).await
    }

    pub async fn update(
        &self,
        params: &UpdateSubscribedEventParams,
    ) -> Result<SubscribedEventInstance, RestError> {
        self.client.update(Domain::Events, &self.path(), params).await
    }

    pub async fn remove(&self) -> Result<bool, RestError> {
        self.client.remove(Domain::Events, &self.path()).await
    }
}

#[derive(Debug, Clone)]
pub struct SubscribedEventList {
    client: TwilioClient,
    subscription_sid: String,
}

impl SubscribedEventList {
    pub(crate) fn new(client: TwilioClient, subscription_sid: impl Into<String>) -> Self {
        Self {
            client,
            subscription_sid: subscription_sid.into(),
        }
    }

    pub async fn create(
        &self,
        params: &CreateSubscribedEventParams,
    ) -> Result<SubscribedEventInstance, RestError> {
        self.client
            .create(Domain::Events, &self.list_path(), params)
            .await
    }

    pub fn get(&self, event_type: impl Into<String>) -> SubscribedEventContext {
        SubscribedEventContext::new(self.client.clone(), self.subscription_sid.clone(), event_type)
    }
}

impl ListResource for SubscribedEventList {
    type Record = SubscribedEventInstance;
    type Filter = ();

    fn client(&self) -> &TwilioClient {
        &self.client
    }

    fn domain(&self) -> Domain {
        Domain::Events
    }

    fn list_path(&self) -> String {
        format!(
            "/v1/Subscriptions/{}/SubscribedEvents",
            encode_segment(&self.subscription_sid)
        )
    }
}
