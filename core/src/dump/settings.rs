//! Export settings loaded from TOML.
//!
//! ```toml
//! extension = "dump"
//! attribute_alignment = "compact"   # or "padded"
//! recompute_normals = false
//! ```
//!
//! Every key is optional; missing keys take their default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::mesh::AttributeAlignment;

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    /// Extension appended to the first object's name. Empty means no extension.
    pub extension: String,
    /// Layout of the normal and texcoord arrays.
    pub attribute_alignment: AttributeAlignment,
    /// Recompute face and vertex normals before indexing instead of trusting
    /// the normals handed out by the host.
    pub recompute_normals: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            extension: "dump".into(),
            attribute_alignment: AttributeAlignment::Compact,
            recompute_normals: false,
        }
    }
}

impl ExportSettings {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(SettingsError::Parse)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        log::debug!("loaded export settings from {}: {settings:?}", path.display());
        Ok(settings)
    }

    /// Dump file name for an export whose first object is `object_name`.
    pub fn file_name(&self, object_name: &str) -> String {
        if self.extension.is_empty() {
            object_name.to_owned()
        } else {
            format!("{object_name}.{}", self.extension)
        }
    }
}

/// Errors that can occur while loading [`ExportSettings`].
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read.
    Io {
        /// Path of the settings file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// The settings document is not valid.
    Parse(toml::de::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse(e) => write!(f, "failed to parse export settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
        }
    }
}
