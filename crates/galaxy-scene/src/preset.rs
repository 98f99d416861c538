//! TOML preset files
//!
//! A preset holds everything needed to start the visualizer in a given look:
//!
//! ```toml
//! [galaxy]
//! count = 50000
//! curl = -1.5
//! inside_color = "#ff6030"
//!
//! [transitions.collapse]
//! duration = 3.0
//! ease = "power3"
//! offset_x = 0.0
//!
//! [view]
//! offset_x = 15.0
//! ```
//!
//! Every table and field is optional. Values are validated against the
//! control bounds rather than clamped, so a typo fails loudly.

use crate::state::DEFAULT_OFFSET_X;
use galaxy_animation::TransitionSpec;
use galaxy_core::{GalaxyError, GalaxyParams, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    pub collapse: TransitionSpec,
    pub scatter: TransitionSpec,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            collapse: TransitionSpec::collapse(),
            scatter: TransitionSpec::scatter(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Offset x new drawables are attached at
    pub offset_x: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            offset_x: DEFAULT_OFFSET_X,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyPreset {
    pub galaxy: GalaxyParams,
    pub transitions: TransitionSettings,
    pub view: ViewSettings,
}

impl GalaxyPreset {
    /// Load and validate a preset from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let preset = Self::from_toml_str(&content)?;
        log::info!("Loaded preset {}", path.display());
        Ok(preset)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let preset: GalaxyPreset = toml::from_str(content)?;
        preset.validate()?;
        Ok(preset)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.galaxy.validate()?;
        for (name, spec) in [
            ("collapse", &self.transitions.collapse),
            ("scatter", &self.transitions.scatter),
        ] {
            if !spec.duration.is_finite() || spec.duration < 0.0 {
                return Err(GalaxyError::AnimationError(format!(
                    "Transition '{name}' has invalid duration {}",
                    spec.duration
                )));
            }
            if !spec.offset_x.is_finite() {
                return Err(GalaxyError::AnimationError(format!(
                    "Transition '{name}' has invalid offset_x"
                )));
            }
        }
        if !self.view.offset_x.is_finite() {
            return Err(GalaxyError::SceneError("view.offset_x must be finite".into()));
        }
        Ok(())
    }
}
