//! Configuration loading.
//!
//! Layers, lowest precedence first:
//! - built-in defaults
//! - a TOML file (`--config`, `SAID_CONFIG`, or the platform config dir)
//! - flags and their environment variables

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use said_id::ParsePolicy;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.toml";

/// Default log filter when neither RUST_LOG nor a level is configured.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Get the default config file path, if the platform has a config dir.
fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("za", "said", "said").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub log_json: bool,

    /// Rules passed to the decoder.
    pub policy: ParsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
            policy: ParsePolicy::default(),
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub strict: Option<bool>,
    pub minimum_age: Option<u16>,
    pub log_level: Option<String>,
    pub log_json: Option<bool>,
}

impl Config {
    /// Load config from `path`, or from the default location if it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigNotFound(path.to_path_buf()).into());
                }
                Self::from_file(path)
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&contents).map_err(|e| {
            CliError::InvalidConfig {
                path: path.to_path_buf(),
                message: e.message().to_string(),
            }
            .into()
        })
    }

    /// Apply flag and environment overrides on top of the loaded values.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(strict) = overrides.strict {
            self.policy.enforce_decommissioned_field = strict;
        }
        if let Some(minimum_age) = overrides.minimum_age {
            self.policy.minimum_age = minimum_age;
        }
        if let Some(level) = &overrides.log_level {
            self.log_level.clone_from(level);
        }
        if let Some(log_json) = overrides.log_json {
            self.log_json = log_json;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.policy, ParsePolicy::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [policy]
            enforce_decommissioned_field = true
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.policy, ParsePolicy::strict());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n[policy]\nminimum_age = 18").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.policy.minimum_age, 18);
        assert!(!config.policy.enforce_decommissioned_field);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigNotFound(_))
        ));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[policy]\nminimum_age = \"old\"").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = Config::default();
        config.apply(&Overrides {
            strict: Some(true),
            minimum_age: Some(21),
            log_level: Some("trace".to_string()),
            log_json: Some(true),
        });
        assert!(config.policy.enforce_decommissioned_field);
        assert_eq!(config.policy.minimum_age, 21);
        assert_eq!(config.log_level, "trace");
        assert!(config.log_json);
    }

    #[test]
    fn test_unset_overrides_keep_file_values() {
        let mut config = Config {
            log_level: "info".to_string(),
            log_json: false,
            policy: ParsePolicy::strict(),
        };
        config.apply(&Overrides::default());
        assert_eq!(config.log_level, "info");
        assert!(config.policy.enforce_decommissioned_field);
    }

    #[test]
    fn test_override_turns_off_file_strictness() {
        let mut config: Config = toml::from_str(
            "log_json = true\n[policy]\nenforce_decommissioned_field = true",
        )
        .unwrap();
        config.apply(&Overrides {
            strict: Some(false),
            log_json: Some(false),
            ..Overrides::default()
        });
        assert!(!config.policy.enforce_decommissioned_field);
        assert!(!config.log_json);
    }
}
