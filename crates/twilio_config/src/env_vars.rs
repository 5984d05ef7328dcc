//! Environment variable naming for the twilio-rs configuration.
//!
//! Configuration paths map onto two families of variables: plain settings use the
//! `config` crate convention (`TWILIO_APP__SERVER__PORT`), secrets use a flat
//! `TWILIO_APP_SECRET_*` name and fall back to the names Twilio documents
//! (`TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`, ...).

use serde_json::Value;
use std::env;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "TWILIO_APP";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "TWILIO_APP_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// `"server.host"` becomes `"TWILIO_APP__SERVER__HOST"`.
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to an environment variable name
///
/// `"twilio.api_key_secret"` becomes `"TWILIO_APP_SECRET_TWILIO_API_KEY_SECRET"`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to the plain variable name Twilio's own tooling uses
///
/// `"twilio.auth_token"` becomes `"TWILIO_AUTH_TOKEN"`.
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() < 2 {
        return path.to_uppercase();
    }

    let service = parts[0];
    let key = parts[1..].join(SECRET_SEPARATOR);
    format!("{}_{}", service, key).to_uppercase()
}

/// Get an environment variable for a configuration path
pub fn get_config_env_var(path: &str) -> Option<String> {
    let env_var = config_path_to_env_var(path);
    env::var(&env_var).ok()
}

/// Get an environment variable for a secret path
///
/// Tries the prefixed name first, then the plain Twilio name.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    let env_var = secret_path_to_env_var(path);
    if let Ok(value) = env::var(&env_var) {
        return Some(value);
    }

    let legacy_env_var = legacy_secret_path_to_env_var(path);
    env::var(&legacy_env_var).ok()
}

/// Check if a path is a secret path
///
/// Paths containing "secret", "key", "password", "token", or "sid" are considered secret.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    path_lower.contains("secret")
        || path_lower.contains("key")
        || path_lower.contains("password")
        || path_lower.contains("token")
        || path_lower.contains("sid")
}

/// Get an environment variable for a path, picking the secret or config naming scheme.
pub fn get_env_var(path: &str) -> Option<String> {
    if is_secret_path(path) {
        get_secret_env_var(path)
    } else {
        get_config_env_var(path)
    }
}

/// Replace every `"secret_from_env"` string in `value` with its environment variable.
///
/// Returns `true` if anything was replaced. Markers without a matching variable are
/// left in place.
pub fn inject_env_vars(value: &mut Value) -> bool {
    fn walk(path: Vec<String>, obj: &mut Value) -> bool {
        let mut replaced = false;

        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::Array(arr) => {
                for (i, v) in arr.iter_mut().enumerate() {
                    let mut new_path = path.clone();
                    new_path.push(i.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::String(s) if s == crate::SECRET_MARKER => {
                let path_str = path.join(".");
                if let Some(env_val) = get_env_var(&path_str) {
                    *s = env_val;
                    replaced = true;
                } else {
                    warn!("env var for {} not found", path_str);
                }
            }
            _ => {}
        }

        replaced
    }

    walk(vec![], value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_path_to_env_var() {
        assert_eq!(
            config_path_to_env_var("server.host"),
            "TWILIO_APP__SERVER__HOST"
        );
        assert_eq!(
            config_path_to_env_var("twilio.region"),
            "TWILIO_APP__TWILIO__REGION"
        );
    }

    #[test]
    fn test_secret_path_to_env_var() {
        assert_eq!(
            secret_path_to_env_var("twilio.account_sid"),
            "TWILIO_APP_SECRET_TWILIO_ACCOUNT_SID"
        );
        assert_eq!(
            secret_path_to_env_var("twilio.api_key_secret"),
            "TWILIO_APP_SECRET_TWILIO_API_KEY_SECRET"
        );
    }

    #[test]
    fn test_legacy_secret_path_to_env_var() {
        assert_eq!(
            legacy_secret_path_to_env_var("twilio.auth_token"),
            "TWILIO_AUTH_TOKEN"
        );
        assert_eq!(legacy_secret_path_to_env_var("token"), "TOKEN");
    }

    #[test]
    fn test_is_secret_path() {
        assert!(is_secret_path("twilio.account_sid"));
        assert!(is_secret_path("twilio.api_key_secret"));
        assert!(is_secret_path("twilio.auth_token"));
        assert!(!is_secret_path("server.host"));
        assert!(!is_secret_path("twilio.region"));
    }

    #[test]
    fn test_inject_env_vars_replaces_markers() {
        env::set_var(
            "TWILIO_APP_SECRET_INJECTTEST_API_KEY_SECRET",
            "resolved-secret",
        );
        let mut value = json!({
            "injecttest": {
                "api_key_secret": "secret_from_env",
                "region": "ie1"
            }
        });

        assert!(inject_env_vars(&mut value));
        assert_eq!(value["injecttest"]["api_key_secret"], "resolved-secret");
        assert_eq!(value["injecttest"]["region"], "ie1");
    }

    #[test]
    fn test_inject_env_vars_keeps_unresolved_markers() {
        let mut value = json!({ "nothere": { "api_key_secret": "secret_from_env" } });
        assert!(!inject_env_vars(&mut value));
        assert_eq!(value["nothere"]["api_key_secret"], "secret_from_env");
    }
}
