//! Optional operator settings, loaded from a TOML file.
//!
//! ```toml
//! multiplier = "1.2"
//! language = "fr"
//! ```
//!
//! Every key has a default, so an empty file (or no file) is valid.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use caisse_voice::Language;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Default settlement multiplier for new sessions.
    pub multiplier: String,
    /// Recognition locale preselected for voice capture.
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            multiplier: "1.1".into(),
            language: Language::None,
        }
    }
}

#[derive(Debug)]
pub enum SettingsError {
    Read(PathBuf, io::Error),
    Parse(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(path, err) => write!(f, "cannot read {}: {}", path.display(), err),
            Self::Parse(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl Settings {
    pub fn from_toml(input: &str) -> Result<Self, SettingsError> {
        toml::from_str(input).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text =
            fs::read_to_string(path).map_err(|e| SettingsError::Read(path.to_path_buf(), e))?;
        Self::from_toml(&text)
    }
}
