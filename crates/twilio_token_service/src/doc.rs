// --- File: crates/twilio_token_service/src/doc.rs ---

// Only compile this module if the 'openapi' feature is enabled
#![cfg(feature = "openapi")]
// Allow dead code for the dummy functions used by the macro
#![allow(dead_code)]

use utoipa::OpenApi;

use crate::handlers::{SmsRequest, SmsResponse, TokenRequestQuery, TokenResponse};

#[utoipa::path(
    get,
    path = "/generate-token",
    params(TokenRequestQuery),
    responses(
        (status = 200, description = "Successfully generated Twilio Access Token", body = TokenResponse),
        (status = 400, description = "Identity missing or empty"),
        (status = 500, description = "Twilio configuration section missing"),
        (status = 503, description = "Twilio service disabled by configuration")
    ),
    tag = "Twilio"
)]
fn doc_generate_token() {}

#[utoipa::path(
    post,
    path = "/sms",
    request_body = SmsRequest,
    responses(
        (status = 200, description = "Message accepted by Twilio", body = SmsResponse),
        (status = 400, description = "Missing recipient, body or sender number"),
        (status = 502, description = "Twilio rejected the message"),
        (status = 503, description = "Twilio service disabled by configuration")
    ),
    tag = "Twilio"
)]
fn doc_send_sms() {}

#[utoipa::path(
    post,
    path = "/webhooks/message-status",
    params(
        ("X-Twilio-Signature" = String, Header, description = "Signature Twilio computed over the URL and parameters")
    ),
    responses(
        (status = 204, description = "Callback accepted"),
        (status = 403, description = "Signature missing or invalid")
    ),
    tag = "Twilio"
)]
fn doc_message_status() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_generate_token, doc_send_sms, doc_message_status),
    components(schemas(TokenResponse, SmsRequest, SmsResponse)),
    tags(
        (name = "Twilio", description = "Twilio tokens, SMS and webhooks")
    )
)]
pub struct TwilioApiDoc;
