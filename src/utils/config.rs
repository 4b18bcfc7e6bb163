// Configuration utilities and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::cadence::Cadence;
use crate::models::defaults::Defaults;
use crate::utils::error::{DatedirsError, Result};
use crate::utils::validation::{validate_count, validate_label};

pub const CONFIG_FILE_NAME: &str = "datedirs.toml";

/// Loading and validation of form defaults
pub struct ConfigParser;

impl ConfigParser {
    /// Per-user defaults file, e.g. `~/.config/datedirs/datedirs.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("datedirs").join(CONFIG_FILE_NAME))
    }

    /// Resolve defaults from an explicit file, the user file, or built-ins.
    ///
    /// An explicit path must exist; the user file is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Defaults> {
        if let Some(path) = explicit {
            return Self::load_defaults(path);
        }

        match Self::user_config_path() {
            Some(path) if path.is_file() => Self::load_defaults(&path),
            _ => {
                debug!("no defaults file found, using built-in defaults");
                Ok(Defaults::default())
            }
        }
    }

    /// Load and validate defaults from a TOML file
    pub fn load_defaults<P: AsRef<Path>>(path: P) -> Result<Defaults> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DatedirsError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DatedirsError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "loading defaults");
        Self::parse_defaults(&content)
    }

    /// Parse defaults from a TOML string; missing keys take built-in values
    pub fn parse_defaults(content: &str) -> Result<Defaults> {
        let defaults: Defaults = toml::from_str(content)
            .map_err(|e| DatedirsError::ConfigError(format!("Invalid TOML syntax: {e}")))?;

        Self::validate_defaults(&defaults)?;
        Ok(defaults)
    }

    fn validate_defaults(defaults: &Defaults) -> Result<()> {
        validate_label(&defaults.label).map_err(Self::as_config_error)?;
        validate_count(defaults.weekly_count, Cadence::Weekly).map_err(Self::as_config_error)?;
        validate_count(defaults.monthly_count, Cadence::Monthly).map_err(Self::as_config_error)?;

        if !(1..=12).contains(&defaults.month) {
            return Err(DatedirsError::ConfigError(format!(
                "month must be between 1 and 12, got {}",
                defaults.month
            )));
        }

        if !(1..=31).contains(&defaults.day) {
            return Err(DatedirsError::ConfigError(format!(
                "day must be between 1 and 31, got {}",
                defaults.day
            )));
        }

        Ok(())
    }

    fn as_config_error(err: DatedirsError) -> DatedirsError {
        match err {
            DatedirsError::ValidationError(msg) => DatedirsError::ConfigError(msg),
            other => other,
        }
    }
}
