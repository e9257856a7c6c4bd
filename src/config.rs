//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/kalkulator/kalkulator.toml`
//! 3. Explicit config file given with `--config`
//! 4. Environment variables: `KALKULATOR_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Largest supported number of fraction digits in the report.
pub const MAX_FRACTION_DIGITS: usize = 17;

/// Unified configuration for kalkulator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Colored prompts and messages (default: true)
    pub color: bool,
    /// Print every report twice (default: false)
    pub repeat_report: bool,
    /// Decimals shown for fractional results (default: 2)
    pub fraction_digits: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            repeat_report: false,
            fraction_digits: 2,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub color: Option<bool>,
    pub repeat_report: Option<bool>,
    pub fraction_digits: Option<usize>,
}

/// Get the XDG config directory for kalkulator.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "kalkulator").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("kalkulator.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            color: overlay.color.unwrap_or(self.color),
            repeat_report: overlay.repeat_report.unwrap_or(self.repeat_report),
            fraction_digits: overlay.fraction_digits.unwrap_or(self.fraction_digits),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Config file named on the command line; it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_layers(global.as_deref(), explicit)
    }

    /// Load from the given files (either may be absent), then apply env overrides.
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(path) = global {
            debug!("loading global config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 3. Explicit config; a missing file is an error, unlike the global one
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("loading config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.validate()
    }

    /// Apply KALKULATOR_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("KALKULATOR"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_bool("repeat_report") {
            settings.repeat_report = val;
        }
        if let Ok(val) = config.get_int("fraction_digits") {
            settings.fraction_digits = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("fraction_digits must not be negative: {val}"),
            })?;
        }

        Ok(settings)
    }

    fn validate(self) -> Result<Self, ApplicationError> {
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ApplicationError::Config {
                message: format!(
                    "fraction_digits must be at most {MAX_FRACTION_DIGITS}, got {}",
                    self.fraction_digits
                ),
            });
        }
        Ok(self)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# kalkulator configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/kalkulator/kalkulator.toml
#   Explicit: kalkulator --config <file>
#   Env:      KALKULATOR_* environment variables (e.g. KALKULATOR_REPEAT_REPORT=true)

# Colored prompts and validation messages (NO_COLOR is honored as well)
# color = true

# Print each result report twice
# repeat_report = false

# Decimals shown for fractional results (0..=17)
# fraction_digits = 2
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
