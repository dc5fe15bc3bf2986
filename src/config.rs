use crate::log_debug;
use thiserror::Error;

/// Errors raised while assembling the configuration from the environment.
///
/// Every variant is fatal: configuration problems abort the run before any
/// file or network I/O happens.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("Environment variable {0} is not set")]
    MissingEnv(String),

    /// The repository identifier is not of the form `owner/name`
    #[error("Repository identifier '{0}' is not of the form owner/name")]
    MalformedRepository(String),
}

/// Configuration for a single notification run.
///
/// Built once at startup from environment variables; the derived URLs are
/// computed at construction and never change afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    /// Repository identifier, `owner/name`
    pub repository: String,
    /// Release tag being announced
    pub tag: String,
    /// Server base URL, e.g. `https://github.com`
    pub server_url: String,
    /// Discord webhook endpoint
    pub webhook_url: String,
    /// Translation credential; translation runs only when present
    pub openai_api_key: Option<String>,
    /// Project display name, the segment after the `/` in `repository`
    pub project_name: String,
    /// Release page URL
    pub release_url: String,
    /// Base URL for release artifact downloads
    pub artifact_base_url: String,
}

/// Environment variables read at startup
const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
const ENV_TAG: &str = "GITHUB_REF_NAME";
const ENV_SERVER_URL: &str = "GITHUB_SERVER_URL";
const ENV_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an injected variable lookup.
    ///
    /// Tests use this to supply values without touching the process
    /// environment. Empty values are treated the same as absent ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ConfigError::MissingEnv(name.to_string())),
            }
        };

        let repository = required(ENV_REPOSITORY)?;
        let tag = required(ENV_TAG)?;
        let server_url = required(ENV_SERVER_URL)?;
        let webhook_url = required(ENV_WEBHOOK_URL)?;
        let openai_api_key = lookup(ENV_OPENAI_API_KEY).filter(|key| !key.is_empty());

        let project_name = parse_project_name(&repository)?;
        let release_url = format!("{server_url}/{repository}/releases/tag/{tag}");
        let artifact_base_url = format!("{server_url}/{repository}/releases/download/{tag}");

        let config = Self {
            repository,
            tag,
            server_url,
            webhook_url,
            openai_api_key,
            project_name,
            release_url,
            artifact_base_url,
        };
        log_debug!("Configuration loaded for {}", config);
        Ok(config)
    }

    /// Whether the translation step should run for this configuration
    pub fn translation_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

/// Extract the project display name from an `owner/name` identifier.
///
/// The identifier must contain exactly one `/` with non-empty halves;
/// anything else fails fast rather than producing malformed URLs downstream.
fn parse_project_name(repository: &str) -> Result<String, ConfigError> {
    let mut parts = repository.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
            Ok(name.to_string())
        }
        _ => Err(ConfigError::MalformedRepository(repository.to_string())),
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.repository, self.tag)
    }
}
