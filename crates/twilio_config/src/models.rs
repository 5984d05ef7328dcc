// --- File: crates/twilio_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Twilio Config ---
// Values set to "secret_from_env" in the config files are resolved from env vars at load time.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TwilioConfig {
    pub account_sid: String, // TWILIO_APP_SECRET_TWILIO_ACCOUNT_SID or TWILIO_ACCOUNT_SID
    pub api_key_sid: String, // TWILIO_APP_SECRET_TWILIO_API_KEY_SID or TWILIO_API_KEY_SID
    pub api_key_secret: String,
    /// Account auth token. Used for REST calls when present and always for webhook signatures.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Default sender for outgoing SMS.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Twilio region, e.g. `ie1`. Also written into access tokens as `twr`.
    #[serde(default)]
    pub region: Option<String>,
    /// Twilio edge location, e.g. `dublin`.
    #[serde(default)]
    pub edge: Option<String>,
    /// Lifetime of issued access tokens in seconds.
    #[serde(default)]
    pub token_ttl: Option<u64>,
    /// Public base URL Twilio uses to reach our webhooks (needed to check signatures).
    #[serde(default)]
    pub webhook_base_url: Option<String>,
}

/// `None` for empty values and for markers no environment variable replaced.
pub fn resolved_secret(value: &str) -> Option<&str> {
    if value.is_empty() || value == crate::SECRET_MARKER {
        None
    } else {
        Some(value)
    }
}

impl TwilioConfig {
    /// Credentials for REST calls: the auth token if configured, otherwise the API key pair.
    pub fn rest_credentials(&self) -> (&str, &str) {
        match self.auth_token() {
            Some(token) => (&self.account_sid, token),
            None => (&self.api_key_sid, &self.api_key_secret),
        }
    }

    /// The auth token, if set and resolved.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref().and_then(resolved_secret)
    }

    /// The API key secret, if resolved.
    pub fn api_key_secret(&self) -> Option<&str> {
        resolved_secret(&self.api_key_secret)
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_twilio: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub twilio: Option<TwilioConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twilio_config(auth_token: Option<&str>) -> TwilioConfig {
        TwilioConfig {
            account_sid: "AC123".to_string(),
            api_key_sid: "SK123".to_string(),
            api_key_secret: "key-secret".to_string(),
            auth_token: auth_token.map(str::to_string),
            phone_number: None,
            region: None,
            edge: None,
            token_ttl: None,
            webhook_base_url: None,
        }
    }

    #[test]
    fn test_rest_credentials_prefer_auth_token() {
        let config = twilio_config(Some("auth-token"));
        assert_eq!(config.rest_credentials(), ("AC123", "auth-token"));
    }

    #[test]
    fn test_rest_credentials_fall_back_to_api_key() {
        assert_eq!(twilio_config(None).rest_credentials(), ("SK123", "key-secret"));
        assert_eq!(twilio_config(Some("")).rest_credentials(), ("SK123", "key-secret"));
        assert_eq!(
            twilio_config(Some("secret_from_env")).rest_credentials(),
            ("SK123", "key-secret")
        );
    }

    #[test]
    fn test_unresolved_markers_count_as_unset() {
        let mut config = twilio_config(Some("secret_from_env"));
        assert!(config.auth_token().is_none());
        assert_eq!(config.api_key_secret(), Some("key-secret"));

        config.api_key_secret = "secret_from_env".to_string();
        assert!(config.api_key_secret().is_none());
        assert_eq!(twilio_config(Some("tok")).auth_token(), Some("tok"));
    }

    #[test]
    fn test_app_config_flags_default_to_false() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": { "host": "0.0.0.0", "port": 8080 }
        }))
        .unwrap();
        assert!(!config.use_twilio);
        assert!(config.twilio.is_none());
    }
}
