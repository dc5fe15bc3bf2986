use crate::config::Config;
use crate::discord::{WebhookClient, WebhookPayload};
use crate::log_debug;
use crate::{changelog, message, translator, ui};
use anyhow::{Context, Result};
use std::fs;

/// Options for a notification run, taken from the command line
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Path to the changelog file
    pub changelog_path: String,
    /// Skip translation even when a credential is configured
    pub no_translate: bool,
    /// Print the webhook payload instead of sending it
    pub dry_run: bool,
}

/// Run the notification pipeline.
///
/// Linear, single pass: load config, read the changelog, classify it,
/// optionally translate, build the embed, then either print it (dry run) or
/// post it to the webhook. Config problems abort before any I/O; a failed
/// webhook delivery propagates so the process exits non-zero.
pub async fn run(options: &RunOptions) -> Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;

    ui::print_info(&format!(
        "📯 Announcing {} {}",
        config.project_name, config.tag
    ));

    let changes = fs::read_to_string(&options.changelog_path)
        .with_context(|| format!("Failed to read changelog at {}", options.changelog_path))?;

    let mut release_note = changelog::format_release_note(&changes);

    if options.dry_run || options.no_translate {
        log_debug!("Translation skipped by flag");
    } else if let Some(api_key) = &config.openai_api_key {
        let spinner = ui::create_spinner("Translating release note...");
        release_note = translator::translate_release_note(api_key, &release_note).await;
        spinner.finish_and_clear();
    } else {
        log_debug!("No translation credential configured; sending original note");
    }

    let embed = message::build_release_embed(&config, &release_note);

    if options.dry_run {
        let payload = WebhookPayload::single(embed);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        ui::print_success("Dry run complete, nothing was sent");
        return Ok(());
    }

    let spinner = ui::create_spinner("Posting release announcement...");
    let result = {
        // Client lives only for the send attempt; dropped on every path
        let client = WebhookClient::new(&config.webhook_url);
        client.send(&embed).await
    };
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            ui::print_success(&format!("Announced {} to Discord", config.tag));
            Ok(())
        }
        Err(e) => Err(e).context("Webhook delivery failed"),
    }
}
