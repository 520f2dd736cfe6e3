//! Configuration handling
//!
//! Configuration is read from `~/.config/todo-report/config.toml` (or the
//! platform equivalent), or from an explicit path given with `--config`.
//! A missing default file means defaults; a missing explicit file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Markers used for task statuses in the report
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    /// ✅ 🚧 📋 ❓
    #[default]
    Emoji,
    /// `[x]` `[~]` `[ ]` `[?]`
    Ascii,
}

/// Report rendering options
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    pub markers: MarkerStyle,
}

/// Request detection options
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RequestConfig {
    /// Keywords that count as a TODO request, in addition to the built-in set
    pub extra_keywords: Vec<String>,
}

/// User configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub request: RequestConfig,
}

impl Config {
    /// Returns the default config file location
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "todo-report", "todo-report")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from `explicit`, or from the default location
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses and validates TOML configuration
    pub fn parse(content: &str) -> std::result::Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.request.extra_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "request.extra_keywords must not contain empty keywords".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.report.markers, MarkerStyle::Emoji);
        assert!(config.request.extra_keywords.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[report]
markers = "ascii"

[request]
extra_keywords = ["backlog", "Sprint"]
"#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.report.markers, MarkerStyle::Ascii);
        assert_eq!(config.request.extra_keywords, vec!["backlog", "Sprint"]);
    }

    #[test]
    fn parse_partial_config() {
        let config = Config::parse("[request]\nextra_keywords = [\"chores\"]\n").unwrap();
        assert_eq!(config.report.markers, MarkerStyle::Emoji);
        assert_eq!(config.request.extra_keywords.len(), 1);

        let config = Config::parse("").unwrap();
        assert_eq!(config.report.markers, MarkerStyle::Emoji);
    }

    #[test]
    fn rejects_unknown_marker_style() {
        let err = Config::parse("[report]\nmarkers = \"fancy\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_blank_keyword() {
        let err = Config::parse("[request]\nextra_keywords = [\"  \"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::load(Some(missing.as_path())).is_err());

        let path = dir.path().join("config.toml");
        fs::write(&path, "[report]\nmarkers = \"ascii\"\n").unwrap();
        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.report.markers, MarkerStyle::Ascii);
    }
}
