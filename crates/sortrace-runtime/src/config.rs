#![forbid(unsafe_code)]

//! Playback configuration as data.
//!
//! Every tunable of the [`PlaybackController`](crate::PlaybackController)
//! lives in one [`PlaybackConfig`] that can be loaded from TOML or JSON at
//! startup.
//!
//! # Loading
//!
//! ```toml
//! # sortrace.toml
//! base_step_delay_ms = 50
//! default_speed = 2.0
//! max_speed = 32.0
//! ```
//!
//! ```rust,ignore
//! let config = PlaybackConfig::from_toml_file("sortrace.toml")?;
//! let config = PlaybackConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `PlaybackConfig::default()` reproduces the controller's built-in
//! behavior; partial files only override the keys they name.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Tunables for playback pacing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct PlaybackConfig {
    /// Inter-step delay at speed 1.0, in milliseconds. Default: 100.
    pub base_step_delay_ms: u64,
    /// Speed multiplier a new controller starts with. Default: 1.0.
    pub default_speed: f64,
    /// Lower clamp for `set_speed`. Default: 0.1.
    pub min_speed: f64,
    /// Upper clamp for `set_speed`. Default: 16.0.
    pub max_speed: f64,
    /// Most operations a single `advance` call may apply. Default: 4096.
    pub max_steps_per_advance: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_step_delay_ms: 100,
            default_speed: 1.0,
            min_speed: 0.1,
            max_speed: 16.0,
            max_steps_per_advance: 4096,
        }
    }
}

impl PlaybackConfig {
    /// Inter-step delay at speed 1.0.
    #[must_use]
    pub fn base_step_delay(&self) -> Duration {
        Duration::from_millis(self.base_step_delay_ms)
    }

    /// Clamp `speed` into `[min_speed, max_speed]`. Non-finite input maps to
    /// `default_speed`.
    #[must_use]
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        if !speed.is_finite() {
            return self.default_speed;
        }
        // max/min rather than clamp: an unvalidated config must not panic.
        speed.max(self.min_speed).min(self.max_speed)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.base_step_delay_ms == 0 {
            errors.push("base_step_delay_ms must be > 0".into());
        }
        if !(self.min_speed.is_finite() && self.min_speed > 0.0) {
            errors.push(format!(
                "min_speed must be finite and > 0, got {}",
                self.min_speed
            ));
        }
        if !self.max_speed.is_finite() || self.max_speed < self.min_speed {
            errors.push(format!(
                "max_speed must be finite and >= min_speed ({}), got {}",
                self.min_speed, self.max_speed
            ));
        }
        if !(self.default_speed >= self.min_speed && self.default_speed <= self.max_speed) {
            errors.push(format!(
                "default_speed must lie in [{}, {}], got {}",
                self.min_speed, self.max_speed, self.default_speed
            ));
        }
        if self.max_steps_per_advance == 0 {
            errors.push("max_steps_per_advance must be > 0".into());
        }

        errors
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)
            .map_err(ConfigError::Toml)?
            .validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)
            .map_err(ConfigError::Json)?
            .validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Check a hand-built config, returning it unchanged when valid.
    pub fn checked(self) -> Result<Self, ConfigError> {
        self.validated()
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a playback configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
