//! Top-level sniff configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ScanConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SNIFF_*`)
/// 2. Project config (`sniff.toml` in project root)
/// 3. User config (`~/.sniff/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SniffConfig {
    pub scan: ScanConfig,
    pub analysis: AnalysisConfig,
}

impl SniffConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) | Err(ConfigError::FileNotFound { .. }) => {}
                    Err(err) => return Err(err),
                }
            }
        }

        // Project config
        let project_config_path = root.join("sniff.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Highest priority: environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SniffConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SniffConfig) -> Result<(), ConfigError> {
        if let Some(threads) = config.scan.threads {
            if threads == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.threads".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(max_file_size) = config.scan.max_file_size {
            if max_file_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.max_file_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(context_lines) = config.analysis.context_lines {
            if context_lines > 20 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.context_lines".to_string(),
                    message: "must be at most 20".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SniffConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: SniffConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut SniffConfig, other: &SniffConfig) {
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if !other.scan.extra_exclude.is_empty() {
            base.scan.extra_exclude = other.scan.extra_exclude.clone();
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if !other.analysis.enabled_rules.is_empty() {
            base.analysis.enabled_rules = other.analysis.enabled_rules.clone();
        }
        if other.analysis.context_lines.is_some() {
            base.analysis.context_lines = other.analysis.context_lines;
        }
        if other.analysis.follow_imports.is_some() {
            base.analysis.follow_imports = other.analysis.follow_imports;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SNIFF_SCAN_THREADS`, `SNIFF_ANALYSIS_CONTEXT_LINES`, etc.
    fn apply_env_overrides(config: &mut SniffConfig) {
        if let Ok(val) = std::env::var("SNIFF_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SNIFF_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SNIFF_ANALYSIS_CONTEXT_LINES") {
            if let Ok(v) = val.parse::<u32>() {
                config.analysis.context_lines = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SNIFF_ANALYSIS_FOLLOW_IMPORTS") {
            if let Ok(v) = val.parse::<bool>() {
                config.analysis.follow_imports = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user config path: `~/.sniff/config.toml`.
fn user_config_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".sniff").join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
