use std::io;

/// Settings that prevent a run from starting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Need to set Lark Webhook URL (PLUGIN_WEBHOOK_URL)")]
    MissingWebhookUrl,

    #[error("Invalid webhook URL '{url}': {reason}")]
    InvalidWebhookUrl { url: String, reason: String },
}

/// Failures of the single webhook POST. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Error sending to Lark: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Error response from Lark (HTTP {code}): {body}")]
    HttpStatus { code: u16, body: String },

    #[error("Lark API error (code {code}): {body}")]
    RemoteRejected { code: serde_json::Number, body: String },
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Error creating message JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("Writing report output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, NotifyError>;
