//! Optional `tipps.toml` read by the programs at startup.
//!
//! ```toml
//! locale = "german"     # german | us | iso
//! week_start = "monday" # monday | sunday
//! color = true
//! ```

use crate::dates::{DateStyle, WeekStart};
use crate::error::Result;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_FILE: &str = "tipps.toml";
pub const CONFIG_ENV_VAR: &str = "TIPPS_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateLocale {
    German,
    #[default]
    Us,
    Iso,
}

impl DateLocale {
    pub fn style(self) -> DateStyle {
        match self {
            DateLocale::German => DateStyle::FullGerman,
            DateLocale::Us => DateStyle::FullUs,
            DateLocale::Iso => DateStyle::Iso,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub locale: DateLocale,
    pub week_start: WeekStart,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            locale: DateLocale::default(),
            week_start: WeekStart::default(),
            color: true,
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads `path`; a file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        info!(path = %path.display(), ?settings, "loaded config");
        Ok(settings)
    }

    /// `$TIPPS_CONFIG` if set, otherwise `tipps.toml` in the working directory.
    pub fn config_path() -> PathBuf {
        env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn discover() -> Result<Self> {
        Self::load(&Self::config_path())
    }

    /// Turns `colored` output on or off for the whole process.
    pub fn apply(&self) {
        colored::control::set_override(self.color);
    }
}
