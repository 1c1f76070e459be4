//! Application configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/deskpager/config.json`, or the path passed with
//! `--config <path>`.
//!
//! # Example
//!
//! ```json
//! {
//!   "palette": {
//!     "background": "#999999",
//!     "active_background": "#ccccff",
//!     "foreground": "#333333",
//!     "active_foreground": "#0077cc",
//!     "outline": "#000000"
//!   },
//!   "pagers": [ { "FixedHeight": 32 }, "width 64" ]
//! }
//! ```

use crate::color::Palette;
use crate::command::SizeSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional: a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colours used by every pager.
    pub palette: Palette,

    /// One entry per pager placement, giving the dimension its tray fixes.
    pub pagers: Vec<SizeSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            pagers: vec![SizeSpec::FixedHeight(32)],
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
