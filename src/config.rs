//! Charthouse configuration.
//!
//! Loaded from `~/.charthouse/config.toml` when present; a missing file
//! means defaults. The `CHARTHOUSE_CHAT_URL` environment variable
//! overrides the file's chat endpoint either way.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::chat::client::Provider;

/// Endpoint used when neither config file nor environment set one.
pub const DEFAULT_CHAT_URL: &str = "https://ghost-tan.vercel.app/api/chat";

/// Name of the environment variable that overrides the chat endpoint.
pub const CHAT_URL_ENV: &str = "CHARTHOUSE_CHAT_URL";

/// Charthouse configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Chat completion endpoint the assistant panel posts to.
    pub chat_url: String,

    /// Which upstream LLM the endpoint should use.
    pub provider: Provider,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat_url: DEFAULT_CHAT_URL.to_string(),
            provider: Provider::Groq,
        }
    }
}

impl Config {
    /// Load config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, String> {
        let config = match Self::path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        Ok(config.with_env_override(std::env::var(CHAT_URL_ENV).ok()))
    }

    /// Parse a config file. Invalid TOML is an error, not a silent default.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// Apply the environment override, if set.
    pub fn with_env_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url
            && !url.is_empty()
        {
            self.chat_url = url;
        }
        self
    }

    /// `~/.charthouse/config.toml`.
    fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".charthouse").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    #[test]
    fn defaults_when_fields_are_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.chat_url, DEFAULT_CHAT_URL);
        assert_eq!(config.provider, Provider::Groq);
    }

    #[test]
    fn file_values_are_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "chat-url = \"https://example.test/chat\"\nprovider = \"openrouter\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.chat_url, "https://example.test/chat");
        assert_eq!(config.provider, Provider::Openrouter);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "chat-url = [not toml").unwrap();

        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn env_override_wins() {
        let config = Config::default().with_env_override(Some("https://env.test/chat".into()));
        assert_eq!(config.chat_url, "https://env.test/chat");
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let config = Config::default().with_env_override(Some(String::new()));
        assert_eq!(config.chat_url, DEFAULT_CHAT_URL);
    }
}
