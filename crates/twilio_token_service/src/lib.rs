// --- File: crates/twilio_token_service/src/lib.rs ---
//! HTTP surface of twilio-rs: access tokens for the client SDKs, outbound SMS and
//! the signed message status webhook.

pub mod app_state;
pub mod doc;
pub mod handlers;
pub mod routes;

pub use app_state::AppState;
pub use routes::routes;
