use reqwest::Url;

use crate::env::Environment;
use crate::error::ConfigError;

pub const WEBHOOK_URL_VAR: &str = "PLUGIN_WEBHOOK_URL";
pub const SECRET_VAR: &str = "PLUGIN_SECRET";
const USE_CARD_VAR: &str = "PLUGIN_USE_CARD";
const DEBUG_VAR: &str = "PLUGIN_DEBUG";
const BUTTONS_VAR: &str = "PLUGIN_BUTTONS";
const VARIABLES_VAR: &str = "PLUGIN_VARIABLES";

/// Plugin settings, resolved from `PLUGIN_*` variables.
#[derive(Debug, Clone)]
pub struct Settings {
    pub webhook_url: Url,
    pub secret: Option<String>,
    /// Interactive card when true, plain text otherwise.
    pub use_card: bool,
    pub debug: bool,
    /// Button allow-list; empty keeps every button.
    pub buttons: Vec<String>,
    /// Extra environment variables to report in the message.
    pub variables: Vec<String>,
}

impl Settings {
    pub fn from_env(env: &Environment) -> Result<Self, ConfigError> {
        let raw_url = env
            .get(WEBHOOK_URL_VAR)
            .ok_or(ConfigError::MissingWebhookUrl)?;
        let webhook_url = Url::parse(raw_url).map_err(|e| ConfigError::InvalidWebhookUrl {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            webhook_url,
            secret: env.get(SECRET_VAR).map(str::to_string),
            use_card: env.get_or(USE_CARD_VAR, "true") == "true",
            debug: env.get_or(DEBUG_VAR, "false") == "true",
            buttons: env.list(BUTTONS_VAR),
            variables: env.list(VARIABLES_VAR),
        })
    }
}
