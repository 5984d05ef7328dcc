// --- File: crates/twilio_jwt/src/error.rs ---
use thiserror::Error;
use twilio_common::{HttpStatusCode, TwilioAppError};

/// Errors raised while building or reading access tokens.
#[derive(Error, Debug)]
pub enum JwtError {
    /// A constructor argument was empty or absent
    #[error("{0} is required")]
    MissingArgument(&'static str),

    /// The requested signing algorithm is not one of HS256, HS384, HS512
    #[error("Algorithm not supported. Allowed values are HS256, HS384, HS512 (got {0})")]
    UnsupportedAlgorithm(String),

    /// The lifetime does not fit a Unix timestamp once added to the issue time
    #[error("ttl of {0} seconds is out of range")]
    TtlOutOfRange(u64),

    /// Header or claims could not be serialized
    #[error("Failed to serialize token: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Signing or verification failed inside jsonwebtoken
    #[error("Token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl From<JwtError> for TwilioAppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::MissingArgument(name) => {
                TwilioAppError::ValidationError(format!("{} is required", name))
            }
            JwtError::UnsupportedAlgorithm(alg) => {
                TwilioAppError::ValidationError(format!("unsupported token algorithm {}", alg))
            }
            JwtError::TtlOutOfRange(ttl) => {
                TwilioAppError::ConfigError(format!("token ttl {} is out of range", ttl))
            }
            JwtError::Serialization(e) => {
                TwilioAppError::InternalError(format!("token serialization: {}", e))
            }
            JwtError::Signing(e) => TwilioAppError::AuthError(format!("token signature: {}", e)),
        }
    }
}

impl HttpStatusCode for JwtError {
    fn status_code(&self) -> u16 {
        match self {
            JwtError::MissingArgument(_) => 400,
            JwtError::UnsupportedAlgorithm(_) => 400,
            JwtError::TtlOutOfRange(_) => 500,
            JwtError::Serialization(_) => 500,
            JwtError::Signing(_) => 500,
        }
    }
}
