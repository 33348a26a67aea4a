//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera, colors, node source, scene geometry)
//! are consolidated here and serialize to/from TOML.

mod camera;
mod colors;
mod nodes;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use nodes::NodeOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::NodeviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[nodes]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Color palette options.
    pub colors: ColorOptions,
    /// Node source and marker parameters.
    pub nodes: NodeOptions,
    /// Reference-frame geometry parameters.
    pub scene: SceneOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NodeviewError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| NodeviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NodeviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NodeviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
