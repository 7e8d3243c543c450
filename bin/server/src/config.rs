//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.

use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Assistant configuration.
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// Assistant-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Delay before the canned backend replies, in milliseconds.
    /// Long enough that the form's pending state is visible.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

fn default_reply_delay_ms() -> u64 {
    1000
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl SiteConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value cannot be parsed.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_config_has_correct_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.reply_delay_ms, 1000);
    }

    #[test]
    fn site_config_defaults_when_sections_missing() {
        let config: SiteConfig = config::Config::builder()
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(config.assistant.reply_delay_ms, 1000);
    }
}
