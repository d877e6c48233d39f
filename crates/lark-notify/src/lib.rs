//! Lark/Feishu pipeline notifier.
//!
//! Reads pipeline metadata from the environment, renders a text message or
//! an interactive card, optionally signs it and posts it to a custom bot
//! webhook.

pub mod buttons;
pub mod cli;
pub mod config;
pub mod context;
pub mod env;
pub mod error;
pub mod format;
pub mod message;
pub mod orchestrator;
pub mod report;
pub mod signer;
pub mod sink;
pub mod status;
