#![allow(clippy::unwrap_used)]

use release_herald::config::{Config, ConfigError};
use std::collections::HashMap;

/// Build a lookup closure over a fixed set of variables
fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

fn full_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("GITHUB_REPOSITORY", "org/my-bot"),
        ("GITHUB_REF_NAME", "v1.2.0"),
        ("GITHUB_SERVER_URL", "https://github.com"),
        ("DISCORD_WEBHOOK_URL", "https://discord.com/api/webhooks/1/abc"),
        ("OPENAI_API_KEY", "sk-test"),
    ]
}

#[test]
fn test_derived_urls() {
    let config = Config::from_lookup(lookup_from(&full_env())).unwrap();

    assert_eq!(config.project_name, "my-bot");
    assert_eq!(
        config.release_url,
        "https://github.com/org/my-bot/releases/tag/v1.2.0"
    );
    assert_eq!(
        config.artifact_base_url,
        "https://github.com/org/my-bot/releases/download/v1.2.0"
    );
}

#[test]
fn test_each_required_variable_is_enforced() {
    for missing in [
        "GITHUB_REPOSITORY",
        "GITHUB_REF_NAME",
        "GITHUB_SERVER_URL",
        "DISCORD_WEBHOOK_URL",
    ] {
        let vars: Vec<(&str, &str)> = full_env()
            .into_iter()
            .filter(|&(name, _)| name != missing)
            .collect();
        let result = Config::from_lookup(lookup_from(&vars));

        match result {
            Err(ConfigError::MissingEnv(name)) => {
                assert_eq!(name, missing, "error should name the missing variable");
            }
            other => panic!("expected MissingEnv for {missing}, got {other:?}"),
        }
    }
}

#[test]
fn test_empty_value_is_treated_as_missing() {
    let mut vars = full_env();
    vars.retain(|&(name, _)| name != "GITHUB_REF_NAME");
    vars.push(("GITHUB_REF_NAME", ""));

    let result = Config::from_lookup(lookup_from(&vars));
    assert!(matches!(result, Err(ConfigError::MissingEnv(name)) if name == "GITHUB_REF_NAME"));
}

#[test]
fn test_translation_credential_is_optional() {
    let vars: Vec<(&str, &str)> = full_env()
        .into_iter()
        .filter(|&(name, _)| name != "OPENAI_API_KEY")
        .collect();

    let config = Config::from_lookup(lookup_from(&vars)).unwrap();
    assert_eq!(config.openai_api_key, None);
    assert!(!config.translation_enabled());

    let config = Config::from_lookup(lookup_from(&full_env())).unwrap();
    assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
    assert!(config.translation_enabled());
}

#[test]
fn test_malformed_repository_identifiers_are_rejected() {
    for repo in ["no-slash", "a/b/c", "/name", "owner/", "/"] {
        let mut vars = full_env();
        vars.retain(|&(name, _)| name != "GITHUB_REPOSITORY");
        vars.push(("GITHUB_REPOSITORY", repo));

        let result = Config::from_lookup(lookup_from(&vars));
        assert!(
            matches!(result, Err(ConfigError::MalformedRepository(_))),
            "'{repo}' should be rejected"
        );
    }
}

#[test]
fn test_missing_env_error_message_names_the_variable() {
    let err = ConfigError::MissingEnv("DISCORD_WEBHOOK_URL".to_string());
    assert_eq!(
        err.to_string(),
        "Environment variable DISCORD_WEBHOOK_URL is not set"
    );
}
