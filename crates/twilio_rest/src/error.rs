// --- File: crates/twilio_rest/src/error.rs ---
use serde::Deserialize;
use thiserror::Error;
use twilio_common::{external_service_error, not_found, HttpStatusCode, TwilioAppError};

/// Errors returned by the REST client.
#[derive(Error, Debug)]
pub enum RestError {
    /// Transport-level failure (connect, TLS, timeout, ...)
    #[error("Twilio API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success response from Twilio
    #[error("Twilio API returned an error: {message} (Status: {status})")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
        more_info: Option<String>,
    },

    /// HTTP 429 from Twilio
    #[error("Rate limited by Twilio")]
    RateLimited,

    /// Response body was not the JSON we expected
    #[error("Failed to parse Twilio API response: {0}")]
    Parse(String),

    /// Request parameters could not be encoded
    #[error("Failed to serialize request parameters: {0}")]
    Serialization(String),

    /// Caller passed an unusable value (zero page size, bad URL, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Missing or incomplete client configuration
    #[error("Twilio configuration missing or incomplete: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::Parse(err.to_string())
    }
}

/// Error document Twilio returns on 4xx/5xx.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<i64>,
    message: Option<String>,
    more_info: Option<String>,
}

impl RestError {
    /// Builds an [`RestError::Api`] from a failed response's status and body text.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => RestError::Api {
                status,
                code: parsed.code,
                message: parsed.message.unwrap_or_else(|| body.to_string()),
                more_info: parsed.more_info,
            },
            Err(_) => RestError::Api {
                status,
                code: None,
                message: body.to_string(),
                more_info: None,
            },
        }
    }

    /// Twilio error code, if the API supplied one.
    pub fn code(&self) -> Option<i64> {
        match self {
            RestError::Api { code, .. } => *code,
            _ => None,
        }
    }
}

impl From<RestError> for TwilioAppError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Request(e) => TwilioAppError::from(e),
            RestError::Api {
                status: 404,
                message,
                ..
            } => not_found(message),
            RestError::Api {
                status,
                code,
                message,
                ..
            } => external_service_error(
                "Twilio API",
                match code {
                    Some(code) => format!("Status: {}, Code: {}, Message: {}", status, code, message),
                    None => format!("Status: {}, Message: {}", status, message),
                },
            ),
            RestError::RateLimited => TwilioAppError::RateLimitError("Twilio API".to_string()),
            RestError::Parse(msg) => {
                TwilioAppError::ParseError(format!("Twilio response parse error: {}", msg))
            }
            RestError::Serialization(msg) => TwilioAppError::ValidationError(msg),
            RestError::InvalidArgument(msg) => TwilioAppError::ValidationError(msg),
            RestError::Config(msg) => TwilioAppError::ConfigError(msg),
        }
    }
}

impl HttpStatusCode for RestError {
    fn status_code(&self) -> u16 {
        match self {
            RestError::Request(_) => 500,
            RestError::Api { .. } => 502,
            RestError::RateLimited => 429,
            RestError::Parse(_) => 502,
            RestError::Serialization(_) => 400,
            RestError::InvalidArgument(_) => 400,
            RestError::Config(_) => 500,
        }
    }
}
