// --- File: crates/twilio_token_service/src/app_state.rs ---
use std::sync::Arc;
use tracing::info;
use twilio_common::TwilioAppError;
use twilio_config::AppConfig;
use twilio_rest::TwilioClient;

/// Shared state of the Twilio routes.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// REST client; `None` while Twilio is disabled or not configured.
    pub client: Option<TwilioClient>,
}

impl AppState {
    /// Builds the state, creating a REST client when Twilio is enabled and configured.
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, TwilioAppError> {
        let client = match (config.use_twilio, config.twilio.as_ref()) {
            (true, Some(twilio)) => {
                let client = TwilioClient::from_config(twilio)?;
                info!(
                    "Twilio REST client ready for account {} (region: {:?}, edge: {:?})",
                    client.account_sid(),
                    client.region(),
                    client.edge()
                );
                Some(client)
            }
            _ => None,
        };

        Ok(Self { config, client })
    }

    /// Uses a pre-built client, e.g. one pointing at a mock server.
    pub fn with_client(config: Arc<AppConfig>, client: TwilioClient) -> Self {
        Self {
            config,
            client: Some(client),
        }
    }
}
