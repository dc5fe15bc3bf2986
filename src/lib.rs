//! Release Herald - CI release announcer for Discord
//!
//! This library reads a release changelog, reformats each conventional-commit
//! line into an emoji-prefixed bullet, optionally translates the result to
//! Chinese via the OpenAI API, and posts a rich embed with per-platform
//! download links to a Discord webhook.

// Allow certain clippy warnings that are stylistic preferences
#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::format_push_string)] // Performance improvement but stylistic

pub mod changelog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discord;
pub mod logger;
pub mod message;
pub mod translator;
pub mod ui;

// Re-export important structs and functions for easier testing
pub use changelog::format_release_note;
pub use config::{Config, ConfigError};
pub use discord::{Embed, EmbedAuthor, EmbedField, WebhookPayload};
pub use message::build_release_embed;
