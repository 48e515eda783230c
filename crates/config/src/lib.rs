//! Configuration loading and validation for UpTend assistant tooling.
//!
//! Loads from `~/.uptend/config.toml` with environment variable overrides.
//! Every field has a serde default, so a missing file (the common case)
//! yields a fully usable configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uptend_core::ConfigError;

/// The root configuration structure.
///
/// Maps directly to `~/.uptend/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Display name for the assistant (used by CLI banners and headers).
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Knowledge routing configuration.
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

/// Knowledge-routing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Maximum characters of corpus content per routed context block.
    #[serde(default = "default_context_budget_chars")]
    pub context_budget_chars: usize,
}

fn default_assistant_name() -> String {
    "George".into()
}
fn default_context_budget_chars() -> usize {
    12_000
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            assistant_name: default_assistant_name(),
            knowledge: KnowledgeConfig::default(),
        }
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            context_budget_chars: default_context_budget_chars(),
        }
    }
}

impl AssistantConfig {
    /// Load configuration from the default path with env overrides applied.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_dir().join("config.toml"))?;

        // Allow env var to override the truncation budget.
        if let Ok(budget) = std::env::var("UPTEND_KNOWLEDGE_BUDGET") {
            match budget.parse::<usize>() {
                Ok(chars) => config.knowledge.context_budget_chars = chars,
                Err(_) => {
                    tracing::warn!(
                        value = %budget,
                        "Ignoring non-numeric UPTEND_KNOWLEDGE_BUDGET"
                    );
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".uptend")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.knowledge.context_budget_chars == 0 {
            return Err(ConfigError::ValidationError(
                "knowledge.context_budget_chars must be > 0".into(),
            ));
        }
        if self.assistant_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "assistant_name must not be blank".into(),
            ));
        }
        Ok(())
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}
