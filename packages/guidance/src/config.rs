//! # Application configuration — `career-corrector.toml`
//!
//! Tunables for the simulated latencies and the default locale. The desktop
//! launcher reads the file from the platform config directory; the web build
//! always runs with [`GuidanceConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [assistant]
//! reply_delay_ms = 1500     # "thinking" time before a chat reply
//!
//! [latency]
//! login_ms = 600
//! account_save_ms = 1000
//! profile_save_ms = 1500
//! banner_ms = 3000          # how long "Saved" stays visible
//!
//! [locale]
//! default = "en"
//! ```
//!
//! Every field has a serde default, so a missing or partial file is
//! equivalent to the defaults above.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::i18n::Locale;

/// Top-level configuration stored in `career-corrector.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GuidanceConfig {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
}

/// Chat assistant settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,
}

fn default_reply_delay() -> u64 {
    1500
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay(),
        }
    }
}

/// Simulated network latencies, in milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_login")]
    pub login_ms: u64,
    #[serde(default = "default_account_save")]
    pub account_save_ms: u64,
    #[serde(default = "default_profile_save")]
    pub profile_save_ms: u64,
    #[serde(default = "default_banner")]
    pub banner_ms: u64,
}

fn default_login() -> u64 {
    600
}

fn default_account_save() -> u64 {
    1000
}

fn default_profile_save() -> u64 {
    1500
}

fn default_banner() -> u64 {
    3000
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: default_login(),
            account_save_ms: default_account_save(),
            profile_save_ms: default_profile_save(),
            banner_ms: default_banner(),
        }
    }
}

/// Locale settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default)]
    pub default: Locale,
}

impl GuidanceConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "career-corrector.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.assistant.reply_delay_ms)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.latency.login_ms)
    }

    pub fn account_save_delay(&self) -> Duration {
        Duration::from_millis(self.latency.account_save_ms)
    }

    pub fn profile_save_delay(&self) -> Duration {
        Duration::from_millis(self.latency.profile_save_ms)
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.latency.banner_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = GuidanceConfig::from_toml("").unwrap();
        assert_eq!(config, GuidanceConfig::default());
        assert_eq!(config.reply_delay(), Duration::from_millis(1500));
        assert_eq!(config.login_delay(), Duration::from_millis(600));
        assert_eq!(config.locale.default, Locale::En);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = GuidanceConfig::from_toml(
            r#"
            [assistant]
            reply_delay_ms = 0

            [latency]
            banner_ms = 500

            [locale]
            default = "ta"
            "#,
        )
        .unwrap();

        assert_eq!(config.assistant.reply_delay_ms, 0);
        assert_eq!(config.latency.banner_ms, 500);
        assert_eq!(config.latency.account_save_ms, 1000);
        assert_eq!(config.latency.profile_save_ms, 1500);
        assert_eq!(config.locale.default, Locale::Ta);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let err = GuidanceConfig::from_toml("[assistant]\nreply_delay_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        assert!(GuidanceConfig::from_toml("[locale]\ndefault = \"xx\"").is_err());
    }

    #[test]
    fn test_to_toml_parses_back() {
        let mut config = GuidanceConfig::default();
        config.latency.login_ms = 10;
        let text = config.to_toml().unwrap();
        assert_eq!(GuidanceConfig::from_toml(&text).unwrap(), config);
    }
}
