// --- File: crates/twilio_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by the twilio-rs crates.
///
/// Crate-specific errors (`JwtError`, `RestError`, ...) convert into this enum at the
/// service boundary via `From` impls in their own crates.
#[derive(Error, Debug)]
pub enum TwilioAppError {
    /// Transport failure talking to Twilio
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Twilio answered with a body we could not decode
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Twilio section missing, incomplete or carrying an unresolved secret
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Webhook signature or token signing failure
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Bad input from the caller (blank identity, missing SMS fields, ...)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Twilio rejected the call with an API error
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// `use_twilio` is off
    #[error("Service unavailable: {0}")]
    UnavailableError(String),

    /// Twilio reported the resource as missing (20404)
    #[error("Not found: {0}")]
    NotFoundError(String),

    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Twilio answered 429
    #[error("Rate limited: {0}")]
    RateLimitError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// HTTP status an error is answered with.
pub trait HttpStatusCode {
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for TwilioAppError {
    fn status_code(&self) -> u16 {
        match self {
            TwilioAppError::HttpError(_) => 502,
            TwilioAppError::ParseError(_) => 502,
            TwilioAppError::ConfigError(_) => 500,
            TwilioAppError::AuthError(_) => 403,
            TwilioAppError::ValidationError(_) => 400,
            TwilioAppError::ExternalServiceError { .. } => 502,
            TwilioAppError::UnavailableError(_) => 503,
            TwilioAppError::NotFoundError(_) => 404,
            TwilioAppError::TimeoutError(_) => 504,
            TwilioAppError::RateLimitError(_) => 429,
            TwilioAppError::InternalError(_) => 500,
        }
    }
}

impl From<reqwest::Error> for TwilioAppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TwilioAppError::TimeoutError(err.to_string())
        } else {
            TwilioAppError::HttpError(err.to_string())
        }
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> TwilioAppError {
    TwilioAppError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> TwilioAppError {
    TwilioAppError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> TwilioAppError {
    TwilioAppError::NotFoundError(message.to_string())
}

pub fn unavailable<T: fmt::Display>(message: T) -> TwilioAppError {
    TwilioAppError::UnavailableError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> TwilioAppError {
    TwilioAppError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(validation_error("bad").status_code(), 400);
        assert_eq!(TwilioAppError::AuthError("sig".into()).status_code(), 403);
        assert_eq!(not_found("x").status_code(), 404);
        assert_eq!(external_service_error("Twilio", "boom").status_code(), 502);
        assert_eq!(unavailable("off").status_code(), 503);
        assert_eq!(TwilioAppError::RateLimitError("slow down".into()).status_code(), 429);
    }

    #[test]
    fn test_external_service_display() {
        let err = external_service_error("Twilio API", "21211 invalid number");
        assert_eq!(
            err.to_string(),
            "External service error: Twilio API - 21211 invalid number"
        );
    }
}
