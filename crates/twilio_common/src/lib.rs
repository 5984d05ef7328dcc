// --- File: crates/twilio_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // axum responses and the shared reqwest client
pub mod logging; // Logging utilities

pub use error::{
    config_error, external_service_error, not_found, unavailable, validation_error,
    HttpStatusCode, TwilioAppError,
};

pub use http::client::{create_client, HTTP_CLIENT};

pub use logging::{init, init_with_level};
