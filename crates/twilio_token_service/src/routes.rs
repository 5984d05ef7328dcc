// --- File: crates/twilio_token_service/src/routes.rs ---
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::app_state::AppState;
use crate::handlers::{generate_token, message_status, send_sms, MESSAGE_STATUS_PATH};

/// Creates a router containing all routes for the Twilio feature.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate-token", get(generate_token))
        .route("/sms", post(send_sms))
        .route(MESSAGE_STATUS_PATH, post(message_status))
        .with_state(state)
}
