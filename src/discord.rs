//! Discord webhook wire types and client
//!
//! The payload follows Discord's webhook-execute schema: one message carrying
//! a single rich embed with a title, author block, accent color, and an
//! ordered field list.

use crate::log_debug;
use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Author block displayed above the embed title
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EmbedAuthor {
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

/// One name/value field in the embed body
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A single rich embed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub url: String,
    pub color: u32,
    pub author: EmbedAuthor,
    pub fields: Vec<EmbedField>,
}

/// Top-level webhook payload; Discord accepts up to ten embeds, we send one
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

impl WebhookPayload {
    pub fn single(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
        }
    }
}

/// Client bound to one webhook URL.
///
/// The underlying connection pool is released when the client goes out of
/// scope, on success and failure alike.
pub struct WebhookClient {
    url: String,
    client: Client,
}

impl WebhookClient {
    /// Creates a new client bound to the given webhook URL
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: Client::new(),
        }
    }

    /// Posts the embed to the webhook.
    ///
    /// A non-success status is an error carrying the response body, so the
    /// caller can log what Discord rejected.
    pub async fn send(&self, embed: &Embed) -> Result<()> {
        let payload = WebhookPayload::single(embed.clone());
        log_debug!("Posting webhook embed: {}", embed.title);

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| anyhow!("Webhook request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Webhook delivery failed with status {}: {}",
                status,
                text
            ));
        }

        log_debug!("Webhook delivery succeeded");
        Ok(())
    }
}
