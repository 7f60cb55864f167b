//! Settings loading

use crate::constants::CONFIG_FILENAMES;
use crate::error::{Error, Result};
use crate::loader::PartialMap;
use crate::renderer::EngineKind;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Engine and adapter settings. Every field has a default, so an empty file
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rendering engine to delegate to.
    pub engine: EngineKind,
    /// Escape HTML in interpolated values. The mustache engine always escapes
    /// `{{x}}` and leaves `{{{x}}}` raw.
    pub escape_html: bool,
    /// Fail on variables missing from the view instead of rendering them empty.
    /// Ignored by the mustache engine.
    pub strict: bool,
    /// Partial name to the name handed to the host loader instead.
    pub partial_aliases: PartialMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            escape_html: true,
            strict: false,
            partial_aliases: PartialMap::new(),
        }
    }
}

impl Settings {
    /// Loads settings from a JSON or YAML file, chosen by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound { path: path.display().to_string() });
        }

        let extension = path.extension().and_then(|ext| ext.to_str());
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = match extension {
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml") | Some("yml") => {
                // An empty YAML document deserializes as null, not as a map.
                if content.trim().is_empty() {
                    Settings::default()
                } else {
                    serde_yaml::from_str(&content)?
                }
            }
            _ => {
                return Err(Error::UnsupportedConfigFormat {
                    path: path.display().to_string(),
                })
            }
        };

        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Looks for a settings file in `dir`, falling back to defaults.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = dir.join(config_file_name);
            if config_file_path.exists() {
                return Self::load(config_file_path);
            }
        }
        debug!("No settings file in {}, using defaults", dir.display());
        Ok(Self::default())
    }
}
