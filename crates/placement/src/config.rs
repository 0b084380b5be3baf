//! Placement configuration loaded from YAML.
//!
//! Every section has defaults, so an empty document is a valid
//! configuration:
//!
//! ```yaml
//! labels:
//!   same_value: 120
//!   different_value: 60
//!   different_parameter: 40
//! label_margin: { x: 20, y: 10 }
//! pressure:
//!   same: 200
//!   want_low: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::extrema::ExtremaSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Minimum distances of one label locator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelDistances {
    pub same_value: f64,
    pub different_value: f64,
    pub different_parameter: f64,
}

impl Default for LabelDistances {
    fn default() -> Self {
        Self {
            same_value: 100.0,
            different_value: 50.0,
            different_parameter: 50.0,
        }
    }
}

impl LabelDistances {
    /// The same distance for every relationship.
    pub fn uniform(distance: f64) -> Self {
        Self {
            same_value: distance,
            different_value: distance,
            different_parameter: distance,
        }
    }
}

/// Pressure marker placement and detection settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureConfig {
    pub same: f64,
    pub different: f64,
    pub want_high: bool,
    pub want_low: bool,
    pub search: ExtremaSettings,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            same: 100.0,
            different: 50.0,
            want_high: true,
            want_low: true,
            search: ExtremaSettings::default(),
        }
    }
}

/// Pixel margins between the image border and the label box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub x: i32,
    pub y: i32,
}

/// Root placement configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Contour value labels
    pub labels: LabelDistances,
    /// Contour font glyphs
    pub symbols: LabelDistances,
    /// Contour symbol images
    pub images: LabelDistances,
    pub pressure: PressureConfig,
    /// Inset of the label box from the image border
    pub label_margin: Margin,
    /// Outset of the symbol, image and pressure boxes beyond the image border
    pub symbol_margin: i32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            labels: LabelDistances::default(),
            symbols: LabelDistances::default(),
            images: LabelDistances::default(),
            pressure: PressureConfig::default(),
            label_margin: Margin::default(),
            symbol_margin: 30,
        }
    }
}

impl PlacementConfig {
    /// Parse a configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        info!(path = %path.display(), "Loaded placement configuration");
        Ok(config)
    }
}
