// --- File: crates/twilio_token_service/src/handlers.rs ---
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::Json,
    Form,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use twilio_common::{config_error, unavailable, validation_error, TwilioAppError};
use twilio_config::{AppConfig, TwilioConfig};
use twilio_jwt::{
    AccessToken, AccessTokenOptions, ChatGrant, SyncGrant, VideoGrant, VoiceGrant, DEFAULT_TTL,
};
use twilio_rest::api::message::CreateMessageParams;
use twilio_rest::webhook::{validate_request, SIGNATURE_HEADER};
use twilio_rest::TwilioClient;

use crate::app_state::AppState;

/// Route the message status callback is served under, relative to where the router is mounted.
pub const MESSAGE_STATUS_PATH: &str = "/webhooks/message-status";

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
pub struct TokenRequestQuery {
    pub identity: String,
    #[serde(rename = "roomName")]
    pub room_name: Option<String>,
    #[serde(rename = "chatServiceSid")]
    pub chat_service_sid: Option<String>,
    #[serde(rename = "syncServiceSid")]
    pub sync_service_sid: Option<String>,
    /// TwiML app placing outgoing calls.
    #[serde(rename = "voiceAppSid")]
    pub voice_app_sid: Option<String>,
    #[serde(rename = "incomingAllow")]
    pub incoming_allow: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TokenResponse {
    pub token: String,
    pub identity: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SmsRequest {
    pub to: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SmsResponse {
    pub success: bool,
    pub sid: String,
    pub status: Option<String>,
}

/// Returns the Twilio section if the feature is switched on and configured.
fn twilio_section(config: &AppConfig) -> Result<&TwilioConfig, TwilioAppError> {
    if !config.use_twilio {
        warn!("Twilio request rejected: service is disabled by configuration");
        return Err(unavailable("Twilio service is disabled by configuration."));
    }
    config.twilio.as_ref().ok_or_else(|| {
        warn!("Twilio request rejected: configuration section missing");
        config_error("Twilio configuration section missing in server config.")
    })
}

fn rest_client(state: &AppState) -> Result<&TwilioClient, TwilioAppError> {
    state
        .client
        .as_ref()
        .ok_or_else(|| config_error("Twilio REST client is not initialised."))
}

/// Issues an access token for the Twilio client SDKs.
///
/// Each grant is added only when its query parameters are present.
#[axum::debug_handler]
pub async fn generate_token(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokenRequestQuery>,
) -> Result<Json<TokenResponse>, TwilioAppError> {
    let twilio_conf = twilio_section(&state.config)?;

    let identity = query.identity.trim();
    if identity.is_empty() {
        return Err(validation_error("identity must not be empty"));
    }

    let mut options =
        AccessTokenOptions::new(identity).ttl(twilio_conf.token_ttl.unwrap_or(DEFAULT_TTL));
    if let Some(region) = twilio_conf.region.as_deref() {
        options = options.region(region);
    }

    let Some(api_key_secret) = twilio_conf.api_key_secret() else {
        warn!("Refusing to sign token: api_key_secret is not resolved");
        return Err(config_error("Twilio api_key_secret is not configured."));
    };

    let mut token = AccessToken::new(
        twilio_conf.account_sid.as_str(),
        twilio_conf.api_key_sid.as_str(),
        api_key_secret,
        options,
    )?;

    if let Some(room) = query.room_name.clone() {
        token.add_grant(VideoGrant::for_room(room));
    }
    if let Some(service_sid) = query.chat_service_sid.clone() {
        token.add_grant(ChatGrant {
            service_sid: Some(service_sid),
            ..Default::default()
        });
    }
    if let Some(service_sid) = query.sync_service_sid.clone() {
        token.add_grant(SyncGrant {
            service_sid: Some(service_sid),
            ..Default::default()
        });
    }
    if query.voice_app_sid.is_some() || query.incoming_allow.is_some() {
        token.add_grant(VoiceGrant {
            incoming_allow: query.incoming_allow,
            outgoing_application_sid: query.voice_app_sid.clone(),
            ..Default::default()
        });
    }

    let jwt = token.to_jwt("HS256")?;
    info!(
        "Issued access token for {} with {} grant(s)",
        identity,
        token.grants().len()
    );

    Ok(Json(TokenResponse {
        token: jwt,
        identity: identity.to_string(),
    }))
}

/// Sends an SMS from the configured phone number.
pub async fn send_sms(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SmsRequest>,
) -> Result<Json<SmsResponse>, TwilioAppError> {
    let twilio_conf = twilio_section(&state.config)?;
    let client = rest_client(&state)?;

    let Some(from) = twilio_conf.phone_number.as_deref() else {
        return Err(validation_error("No sender phone number configured for SMS."));
    };
    if request.to.trim().is_empty() || request.message.is_empty() {
        return Err(validation_error("Both 'to' and 'message' are required."));
    }

    let mut params = CreateMessageParams::new(request.to.trim())
        .from(from)
        .body(request.message.as_str());
    if let Some(base) = twilio_conf.webhook_base_url.as_deref() {
        params = params.status_callback(format!(
            "{}{}",
            base.trim_end_matches('/'),
            MESSAGE_STATUS_PATH
        ));
    }

    info!("Sending SMS to {}", request.to);
    let message = client.messages().create(&params).await?;

    let status = message
        .status
        .as_ref()
        .and_then(|s| serde_json::to_value(s).ok())
        .and_then(|v| v.as_str().map(str::to_string));

    Ok(Json(SmsResponse {
        success: true,
        sid: message.sid,
        status,
    }))
}

/// Receives Twilio's message status callbacks.
///
/// The request must carry a valid `X-Twilio-Signature` computed over
/// `webhook_base_url` plus the request path.
pub async fn message_status(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
    Form(params): Form<Vec<(String, String)>>,
) -> Result<StatusCode, TwilioAppError> {
    let twilio_conf = twilio_section(&state.config)?;
    let (Some(auth_token), Some(base)) = (
        twilio_conf.auth_token(),
        twilio_conf.webhook_base_url.as_deref(),
    ) else {
        return Err(config_error(
            "auth_token and webhook_base_url are required to validate webhooks.",
        ));
    };

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or(MESSAGE_STATUS_PATH);
    let url = format!("{}{}", base.trim_end_matches('/'), path_and_query);

    if signature.is_empty() || !validate_request(auth_token, signature, &url, &params) {
        warn!("Rejected webhook with invalid signature for {}", url);
        return Err(TwilioAppError::AuthError(
            "Invalid Twilio signature".to_string(),
        ));
    }

    let field = |name: &str| {
        params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("unknown")
    };
    info!(
        "Message {} is now {}",
        field("MessageSid"),
        field("MessageStatus")
    );
    if let Some((_, code)) = params.iter().find(|(k, _)| k == "ErrorCode") {
        warn!("Message {} reported error code {}", field("MessageSid"), code);
    }

    Ok(StatusCode::NO_CONTENT)
}
