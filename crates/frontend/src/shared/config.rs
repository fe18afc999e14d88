use leptos::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::shared::editing::UnchangedSavePolicy;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub uploads: UploadConfig,
    pub notices: NoticeConfig,
    pub editing: EditingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Empty: derived from the window location
    pub base_url: String,
    pub request_timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            request_timeout_ms: 30_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UploadConfig {
    pub max_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NoticeConfig {
    pub success_timeout_ms: u32,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            success_timeout_ms: 3_000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct EditingConfig {
    pub unchanged_save: UnchangedSavePolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
request_timeout_ms = 30000

[uploads]
max_bytes = 5242880

[notices]
success_timeout_ms = 3000

[editing]
unchanged_save = "skip"
"#;

pub fn parse_config(source: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Load configuration.
///
/// The document baked in through `SALVIA_CONFIG` at build time wins;
/// otherwise the embedded default is used.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match option_env!("SALVIA_CONFIG") {
        Some(source) if !source.trim().is_empty() => {
            log::info!("Using configuration from SALVIA_CONFIG");
            parse_config(source)
        }
        _ => {
            log::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)
        }
    }
}

/// Config from context, falling back to defaults outside the app tree
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.uploads.max_bytes, 5 * 1024 * 1024);
        assert_eq!(config.editing.unchanged_save, UnchangedSavePolicy::Skip);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://api.salvia.example"

            [editing]
            unchanged_save = "reject"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://api.salvia.example");
        assert_eq!(config.api.request_timeout_ms, 30_000);
        assert_eq!(config.notices.success_timeout_ms, 3_000);
        assert_eq!(config.editing.unchanged_save, UnchangedSavePolicy::Reject);
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        assert!(parse_config("[editing]\nunchanged_save = \"maybe\"").is_err());
    }
}
