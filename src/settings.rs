//! User-tunable settings.
//!
//! Settings are stored as JSON under the platform config directory. A missing
//! or malformed file never prevents startup; defaults are used instead.

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_CANVAS_RESOLUTION, DEFAULT_LOG_FILTER, DEGENERATE_SCALE_STEP,
    MAX_SCALE_STEP, MIN_SCALE_STEP, SCALE_SENSITIVITY, SETTINGS_FILE_NAME,
};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Tuning for the two-pointer gesture path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    pub scale_sensitivity: f32,
    /// Per-batch lower bound on the scale factor
    pub min_scale_step: f32,
    /// Per-batch upper bound on the scale factor
    pub max_scale_step: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            scale_sensitivity: SCALE_SENSITIVITY,
            min_scale_step: MIN_SCALE_STEP,
            max_scale_step: MAX_SCALE_STEP,
        }
    }
}

impl GestureSettings {
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.scale_sensitivity.is_finite() || self.scale_sensitivity <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "gesture.scale_sensitivity",
                reason: format!("must be finite and positive, got {}", self.scale_sensitivity),
            });
        }
        if !(self.min_scale_step > DEGENERATE_SCALE_STEP && self.min_scale_step <= 1.0) {
            return Err(SettingsError::Invalid {
                field: "gesture.min_scale_step",
                reason: format!("must be in ({DEGENERATE_SCALE_STEP}, 1], got {}", self.min_scale_step),
            });
        }
        if !(self.max_scale_step.is_finite() && self.max_scale_step >= 1.0) {
            return Err(SettingsError::Invalid {
                field: "gesture.max_scale_step",
                reason: format!("must be finite and at least 1, got {}", self.max_scale_step),
            });
        }
        Ok(())
    }
}

/// Resolution of the drawing canvas in content pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasResolution {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasResolution {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_RESOLUTION.0,
            height: DEFAULT_CANVAS_RESOLUTION.1,
        }
    }
}

/// Top-level settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub gesture: GestureSettings,
    pub canvas_resolution: CanvasResolution,
    /// `EnvFilter` directive for `logging::init_from`, used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gesture: GestureSettings::default(),
            canvas_resolution: CanvasResolution::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            debug!("No config directory on this platform, using default settings");
            return Self::default();
        };

        if !path.exists() {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), "Failed to load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Load and validate settings from a specific file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        self.gesture.validate()?;
        if self.canvas_resolution.width == 0 || self.canvas_resolution.height == 0 {
            return Err(SettingsError::Invalid {
                field: "canvas_resolution",
                reason: format!(
                    "dimensions must be non-zero, got {}x{}",
                    self.canvas_resolution.width, self.canvas_resolution.height
                ),
            });
        }
        Ok(())
    }
}

/// `<config_dir>/paint-viewport/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}
