// --- File: crates/twilio_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use models::*;

/// Config values equal to this string are replaced from the environment at load time.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Loads the application configuration.
///
/// Sources, later ones winning:
/// 1. `<CONFIG_DIR>/default.*`
/// 2. `<CONFIG_DIR>/<RUN_ENV>.*`
/// 3. environment variables with prefix `PREFIX` (default `TWILIO_APP`) and separator `__`
///
/// Afterwards every `"secret_from_env"` value is resolved via [`env_vars::get_env_var`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();
    let config_dir = PathBuf::from(env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string()));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!(
        "loading config from {} and {} (prefix {})",
        default_path.display(),
        env_path.display(),
        prefix
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(Environment::with_prefix(&prefix).separator(env_vars::CONFIG_SEPARATOR));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Parses configuration from an in-memory document, then resolves secret markers.
///
/// Used for embedded defaults and in tests.
pub fn load_config_from_str(contents: &str, format: FileFormat) -> Result<AppConfig, ConfigError> {
    let raw_config: AppConfig = Config::builder()
        .add_source(File::from_str(contents, format))
        .build()?
        .try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json: Value = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    env_vars::inject_env_vars(&mut json);
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is taken from `DOTENV_OVERRIDE`, else from the first command line argument
/// if it starts with `.env`, else `.env`. Loading happens at most once per process;
/// the chosen path is returned.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_toml() {
        let config = load_config_from_str(
            r#"
            use_twilio = true

            [server]
            host = "0.0.0.0"
            port = 9000

            [twilio]
            account_sid = "AC123"
            api_key_sid = "SK123"
            api_key_secret = "shh"
            region = "ie1"
            token_ttl = 600
            "#,
            FileFormat::Toml,
        )
        .unwrap();

        assert!(config.use_twilio);
        assert_eq!(config.server.port, 9000);
        let twilio = config.twilio.unwrap();
        assert_eq!(twilio.region.as_deref(), Some("ie1"));
        assert_eq!(twilio.token_ttl, Some(600));
        assert!(twilio.edge.is_none());
    }

    #[test]
    fn test_load_config_resolves_secret_markers() {
        env::set_var("TWILIO_APP_SECRET_TWILIO_API_KEY_SECRET", "from-env");
        let config = load_config_from_str(
            r#"{
                "server": { "host": "127.0.0.1", "port": 8086 },
                "twilio": {
                    "account_sid": "AC123",
                    "api_key_sid": "SK123",
                    "api_key_secret": "secret_from_env"
                }
            }"#,
            FileFormat::Json,
        )
        .unwrap();

        assert_eq!(config.twilio.unwrap().api_key_secret, "from-env");
    }

    #[test]
    fn test_missing_server_section_is_an_error() {
        let result = load_config_from_str("use_twilio = true", FileFormat::Toml);
        assert!(result.is_err());
    }
}
