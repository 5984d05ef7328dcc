// --- File: crates/twilio_rest/src/verify/mod.rs ---
//! Verify v2 (`verify.twilio.com/v2`), scoped to one verification service.

pub mod factor;
pub mod messaging_configuration;
pub mod verification;

use crate::client::TwilioClient;

use factor::{FactorContext, FactorList};
use messaging_configuration::{MessagingConfigurationContext, MessagingConfigurationList};
use verification::{VerificationContext, VerificationList};

#[derive(Debug, Clone)]
pub struct VerifyV2 {
    client: TwilioClient,
}

impl VerifyV2 {
    pub(crate) fn new(client: TwilioClient) -> Self {
        Self { client }
    }

    pub fn service(&self, service_sid: impl Into<String>) -> VerifyService {
        VerifyService {
            client: self.client.clone(),
            service_sid: service_sid.into(),
        }
    }
}

/// `/v2/Services/{ServiceSid}`
#[derive(Debug, Clone)]
pub struct VerifyService {
    client: TwilioClient,
    service_sid: String,
}

impl VerifyService {
    pub fn service_sid(&self) -> &str {
        &self.service_sid
    }

    pub fn verifications(&self) -> VerificationList {
        VerificationList::new(self.client.clone(), self.service_sid.clone())
    }

    pub fn verification(&self, sid: impl Into<String>) -> VerificationContext {
        VerificationContext::new(self.client.clone(), self.service_sid.clone(), sid)
    }

    pub fn factors(&self, identity: impl Into<String>) -> FactorList {
        FactorList::new(self.client.clone(), self.service_sid.clone(), identity)
    }

    pub fn factor(&self, identity: impl Into<String>, sid: impl Into<String>) -> FactorContext {
        FactorContext::new(self.client.clone(), self.service_sid.clone(), identity, sid)
    }

    pub fn messaging_configurations(&self) -> MessagingConfigurationList {
        MessagingConfigurationList::new(self.client.clone(), self.service_sid.clone())
    }

    /// `country` is an ISO 3166-1 alpha-2 code or `all`.
    pub fn messaging_configuration(&self, country: impl Into<String>) -> MessagingConfigurationContext {
        MessagingConfigurationContext::new(self.client.clone(), self.service_sid.clone(), country)
    }
}
