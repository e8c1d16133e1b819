//! Configuration management for backlog-sync
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (GITHUB_REPO, BACKLOG_SPRINTS)
//! 3. Config file (~/.config/backlog/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of sprint milestones ensured when none is configured
pub const DEFAULT_SPRINT_COUNT: u32 = 10;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Target repository (owner/repo or a GitHub URL)
    pub repository: Option<String>,

    /// Number of sprint milestones to ensure (Sprint 0..count-1)
    pub sprint_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: None,
            sprint_count: DEFAULT_SPRINT_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/backlog/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("backlog").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - GITHUB_REPO: Target repository (owner/repo)
    /// - BACKLOG_SPRINTS: Number of sprint milestones
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(repository) = std::env::var("GITHUB_REPO") {
            if !repository.trim().is_empty() {
                self.repository = Some(repository.trim().to_string());
            }
        }

        if let Ok(sprints) = std::env::var("BACKLOG_SPRINTS") {
            if let Ok(count) = sprints.trim().parse() {
                self.sprint_count = count;
            }
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, repository: Option<String>, sprints: Option<u32>) -> Self {
        if let Some(repository) = repository {
            self.repository = Some(repository);
        }

        if let Some(count) = sprints {
            self.sprint_count = count;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(repository: Option<String>, sprints: Option<u32>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(repository, sprints))
    }

    /// The configured repository, or a configuration error naming the fix
    pub fn require_repository(&self) -> Result<&str> {
        self.repository.as_deref().ok_or_else(|| {
            Error::Config(
                "No repository configured. Pass --repo owner/repo, set GITHUB_REPO, \
                 or add `repository` to the config file"
                    .to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.repository.is_none());
        assert_eq!(config.sprint_count, DEFAULT_SPRINT_COUNT);
    }

    #[test]
    fn test_cli_overrides() {
        let config =
            Config::default().with_cli_overrides(Some("acme/widgets".to_string()), Some(4));

        assert_eq!(config.repository.as_deref(), Some("acme/widgets"));
        assert_eq!(config.sprint_count, 4);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
repository = "acme/widgets"
sprint_count = 6
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.repository.as_deref(), Some("acme/widgets"));
        assert_eq!(config.sprint_count, 6);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
repository = "acme/widgets"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // sprint_count should use default
        assert_eq!(config.sprint_count, DEFAULT_SPRINT_COUNT);
    }

    #[test]
    fn test_require_repository_missing() {
        let config = Config::default();
        let err = config.require_repository().unwrap_err();
        assert!(err.to_string().contains("No repository configured"));
    }
}
