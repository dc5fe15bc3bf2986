//! Release-note translation via the OpenAI chat-completions API
//!
//! Translation is best-effort: any transport error, non-success status, or
//! empty completion logs a warning and leaves the release note untouched.
//! The announcement always ships.

use crate::{log_debug, log_warn};
use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Model used for changelog translation
pub const TRANSLATION_MODEL: &str = "gpt-3.5-turbo-0301";

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Attribution line appended to machine-translated notes
pub const ATTRIBUTION: &str = "\n\n:beginner: 以上内容由 OpenAI GPT-3.5 Turbo 生成";

/// Translation instruction sent ahead of the note itself. Emoji tokens of
/// the form `:name:` must survive translation verbatim.
const INSTRUCTION: &str = "You are a translator for translating the software changelog to chinese,\
your answer should not include anything outside the list.\
Do not translate the word matched ':.*:', just keep it as it is.";

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat-completion response, reduced to the fields the translator reads
#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: Option<ResponseMessage>,
}

#[derive(Deserialize, Debug)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

/// Pull the translated text out of a completion response, if there is one.
///
/// Returns `None` for an empty choice list or a choice without content;
/// the caller falls back to the untranslated note in that case.
pub fn extract_translation(response: &ChatResponse) -> Option<String> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.as_ref())
        .and_then(|message| message.content.clone())
}

/// Translate the release note to Chinese, appending the attribution line.
///
/// On any failure the original note is returned unchanged; translation is
/// never fatal to the run.
pub async fn translate_release_note(api_key: &str, release_note: &str) -> String {
    match request_translation(api_key, release_note).await {
        Ok(response) => match extract_translation(&response) {
            Some(translated) => {
                log_debug!("Translation succeeded ({} bytes)", translated.len());
                format!("{translated}{ATTRIBUTION}")
            }
            None => {
                log_warn!("Translation response contained no message; using original note");
                release_note.to_string()
            }
        },
        Err(e) => {
            log_warn!("Translation failed, using original note: {}", e);
            release_note.to_string()
        }
    }
}

/// Perform the chat-completion request
async fn request_translation(api_key: &str, release_note: &str) -> Result<ChatResponse> {
    let request_body = ChatRequest {
        model: TRANSLATION_MODEL,
        messages: vec![
            ChatMessage {
                role: "user",
                content: INSTRUCTION,
            },
            ChatMessage {
                role: "user",
                content: release_note,
            },
        ],
    };

    let client = Client::new();
    let response = client
        .post(API_URL)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .json(&request_body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await?;
        return Err(anyhow!(
            "OpenAI API request failed with status {}: {}",
            status,
            text
        ));
    }

    Ok(response.json::<ChatResponse>().await?)
}
