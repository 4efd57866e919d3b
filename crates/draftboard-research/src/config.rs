//! Configuration for research calls

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the deep-research client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// API endpoint base URL
    pub endpoint: String,

    /// Model for thorough research runs
    pub full_model: String,

    /// Cheaper, faster model for routine runs
    pub mini_model: String,

    /// Maximum time for a single research call (seconds)
    pub timeout_secs: u64,

    /// API key; when unset, `OPENAI_API_KEY` is consulted at call time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ResearchConfig {
    /// Get the research timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The model to use for a call
    pub fn model(&self, full: bool) -> &str {
        if full {
            &self.full_model
        } else {
            &self.mini_model
        }
    }

    /// Resolve the effective API key: configured value first, then the
    /// `OPENAI_API_KEY` environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|key| !key.is_empty())
    }

    /// Whether a key is available without making a call
    pub fn is_configured(&self) -> bool {
        self.resolve_api_key().is_some()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.full_model.is_empty() || self.mini_model.is_empty() {
            return Err("model names must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize TOML: {}", e))
    }
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            full_model: "o3-deep-research".to_string(),
            mini_model: "o4-mini-deep-research".to_string(),
            timeout_secs: 600,
            api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(ResearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ResearchConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("timeout_secs"));
    }

    #[test]
    fn test_empty_model_rejected() {
        let config = ResearchConfig {
            mini_model: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ResearchConfig {
            timeout_secs: 120,
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let toml_str = config.to_toml().unwrap();
        let restored = ResearchConfig::from_toml(&toml_str).unwrap();
        assert_eq!(restored.timeout_secs, 120);
        assert_eq!(restored.api_key.as_deref(), Some("sk-test"));
        assert_eq!(restored.full_model, config.full_model);
    }

    #[test]
    fn test_model_selection() {
        let config = ResearchConfig::default();
        assert_eq!(config.model(true), "o3-deep-research");
        assert_eq!(config.model(false), "o4-mini-deep-research");
    }

    #[test]
    fn test_configured_key_wins_over_env() {
        let config = ResearchConfig {
            api_key: Some("sk-configured".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-configured"));
    }
}
