// --- File: crates/twilio_rest/src/api/payment.rs ---
//! Pay connector sessions on a live call (`<Pay>` over the REST API).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::account_path;
use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::serialize::{encode_segment, rfc2822};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PaymentInstance {
    pub sid: String,
    pub account_sid: String,
    pub call_sid: String,
    #[serde(default, with = "rfc2822")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, with = "rfc2822")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl PaymentInstance {
    pub fn context(&self, client: &TwilioClient) -> PaymentContext {
        PaymentContext::new(
            client.clone(),
            &self.account_sid,
            self.call_sid.clone(),
            self.sid.clone(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    CreditCard,
    AchDebit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    OneTime,
    Reusable,
    PaymentMethod,
}

/// Starts a payment session. `IdempotencyKey` and `StatusCallback` are mandatory.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePaymentParams {
    pub idempotency_key: String,
    pub status_callback: String,
    pub bank_account_type: Option<String>,
    pub charge_amount: Option<String>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub input: Option<String>,
    pub min_postal_code_length: Option<u32>,
    /// Connector-specific parameters, sent as JSON text.
    pub parameter: Option<Value>,
    pub payment_connector: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub postal_code: Option<bool>,
    pub security_code: Option<bool>,
    pub timeout: Option<u32>,
    pub token_type: Option<TokenType>,
    pub valid_card_types: Option<String>,
}

impl CreatePaymentParams {
    pub fn new(idempotency_key: impl Into<String>, status_callback: impl Into<String>) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            status_callback: status_callback.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentCapture {
    PaymentCardNumber,
    ExpirationDate,
    SecurityCode,
    PostalCode,
    BankRoutingNumber,
    BankAccountNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSessionStatus {
    Complete,
    Cancel,
}

/// Moves a session forward: request one `Capture` field or end it with `Status`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePaymentParams {
    pub idempotency_key: String,
    pub status_callback: String,
    pub capture: Option<PaymentCapture>,
    pub status: Option<PaymentSessionStatus>,
}

impl UpdatePaymentParams {
    pub fn new(idempotency_key: impl Into<String>, status_callback: impl Into<String>) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            status_callback: status_callback.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaymentContext {
    client: TwilioClient,
    account_sid: String,
    call_sid: String,
    sid: String,
}

impl PaymentContext {
    pub(crate) fn new(
        client: TwilioClient,
        account_sid: &str,
        call_sid: impl Into<String>,
        sid: impl Into<String>,
    ) -> Self {
        Self {
            client,
            account_sid: account_sid.to_string(),
            call_sid: call_sid.into(),
            sid: sid.into(),
        }
    }

    pub async fn update(&self, params: &UpdatePaymentParams) -> Result<PaymentInstance, RestError> {
        let path = format!(
            "{}/Calls/{}/Payments/{}.json",
            account_path(&self.account_sid),
            encode_segment(&self.call_sid),
            encode_segment(&self.sid)
        );
        self.client.update(Domain::Api, &path, params).await
    }
}

#[derive(Debug, Clone)]
pub struct PaymentList {
    client: TwilioClient,
    account_sid: String,
    call_sid: String,
}

impl PaymentList {
    pub(crate) fn new(client: TwilioClient, account_sid: &str, call_sid: impl Into<String>) -> Self {
        Self {
            client,
            account_sid: account_sid.to_string(),
            call_sid: call_sid.into(),
        }
    }

    pub async fn create(&self, params: &CreatePaymentParams) -> Result<PaymentInstance, RestError> {
        let path = format!(
            "{}/Calls/{}/Payments.json",
            account_path(&self.account_sid),
            encode_segment(&self.call_sid)
        );
        self.client.create(Domain::Api, &path, params).await
    }

    pub fn get(&self, sid: impl Into<String>) -> PaymentContext {
        PaymentContext::new(
            self.client.clone(),
            &self.account_sid,
            self.call_sid.clone(),
            sid,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::to_form_pairs;
    use serde_json::json;

    #[test]
    fn test_create_params_encode_enums_and_json() {
        let params = CreatePaymentParams {
            payment_method: Some(PaymentMethod::AchDebit),
            token_type: Some(TokenType::OneTime),
            parameter: Some(json!({ "merchant": "acme" })),
            ..CreatePaymentParams::new("key-1", "https://example.com/pay")
        };
        let pairs = to_form_pairs(&params).unwrap();
        assert!(pairs.contains(&("IdempotencyKey".to_string(), "key-1".to_string())));
        assert!(pairs.contains(&("PaymentMethod".to_string(), "ach-debit".to_string())));
        assert!(pairs.contains(&("TokenType".to_string(), "one-time".to_string())));
        assert!(pairs.contains(&("Parameter".to_string(), r#"{"merchant":"acme"}"#.to_string())));
    }

    #[test]
    fn test_update_params_capture() {
        let params = UpdatePaymentParams {
            capture: Some(PaymentCapture::PaymentCardNumber),
            ..UpdatePaymentParams::new("key-2", "https://example.com/pay")
        };
        let pairs = to_form_pairs(&params).unwrap();
        assert!(pairs.contains(&("Capture".to_string(), "payment-card-number".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "Status"));
    }
}
