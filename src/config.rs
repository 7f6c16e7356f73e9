//! Analysis configuration: canonical half length, sentinel labels and
//! crediting switches.
//!
//! Resolution order is an explicit `--config` path, then the
//! `FUTSAL_MINUTES_CONFIG` environment variable, then
//! `<config_dir>/futsal-minutes/config.toml` when that file exists, and
//! finally the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MinutesError, Result};
use crate::CONFIG_ENV_VAR;


/// Canonical effective length of one half, in seconds.
pub const DEFAULT_HALF_LENGTH_SECS: f64 = 1200.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Length every half is remapped onto for effective time.
    pub half_length_secs: f64,
    /// Event type closing the first half.
    pub first_half_end: String,
    /// Event type marking the real second-half kickoff, when recorded.
    pub second_half_start: String,
    /// Event type closing the match.
    pub match_end: String,
    /// Credit the goalkeeper bucket even when no movement player is listed.
    pub goalkeeper_solo_credit: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            half_length_secs: DEFAULT_HALF_LENGTH_SECS,
            first_half_end: "Fine primo tempo".to_string(),
            second_half_start: "Inizio secondo tempo".to_string(),
            match_end: "Fine partita".to_string(),
            goalkeeper_solo_credit: false,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded analysis config from {}", path.display());
        Ok(config)
    }

    /// Resolve the configuration from an explicit path, the environment,
    /// the per-user config file, or defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Self::load(Path::new(path.trim()));
            }
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Path: <config_dir>/futsal-minutes/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("futsal-minutes").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.half_length_secs.is_finite() || self.half_length_secs <= 0.0 {
            return Err(MinutesError::InvalidConfig {
                message: format!(
                    "half_length_secs must be a positive number, got {}",
                    self.half_length_secs
                ),
            });
        }

        for (name, label) in [
            ("first_half_end", &self.first_half_end),
            ("second_half_start", &self.second_half_start),
            ("match_end", &self.match_end),
        ] {
            if label.trim().is_empty() {
                return Err(MinutesError::InvalidConfig {
                    message: format!("{} cannot be blank", name),
                });
            }
        }

        Ok(())
    }

    pub fn is_first_half_end(&self, event_type: &str) -> bool {
        matches_label(&self.first_half_end, event_type)
    }

    pub fn is_second_half_start(&self, event_type: &str) -> bool {
        matches_label(&self.second_half_start, event_type)
    }

    pub fn is_match_end(&self, event_type: &str) -> bool {
        matches_label(&self.match_end, event_type)
    }
}

fn matches_label(label: &str, event_type: &str) -> bool {
    label.trim().eq_ignore_ascii_case(event_type.trim())
}
