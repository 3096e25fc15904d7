//! User settings, stored as pretty JSON.
//!
//! Every field has a default so a partial (or older) file still loads.

use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::view::{FixedMetrics, ViewportGeometry};

const SETTINGS_DIR: &str = "linecore";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub metrics: MetricsSettings,
    #[serde(default)]
    pub viewport: ViewportSettings,
    /// `tracing` filter directive, e.g. `linecore=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    pub char_width: u32,
    pub line_height: u32,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            char_width: 8,
            line_height: 8,
        }
    }
}

impl MetricsSettings {
    pub fn to_metrics(self) -> FixedMetrics {
        FixedMetrics::new(self.char_width, self.line_height)
    }
}

/// Text area size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 200,
        }
    }
}

impl ViewportSettings {
    pub fn to_geometry(self) -> ViewportGeometry {
        ViewportGeometry::new(self.width, self.height)
    }
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

/// Creates the settings file with defaults on first run.
pub fn ensure_settings_file() -> io::Result<PathBuf> {
    let path = get_settings_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
    write_default_settings(&path)?;
    Ok(path)
}

/// Writes `Settings::default()` to `path` unless a file is already there.
/// An existing file is never touched.
pub fn write_default_settings(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(e),
    };
    serde_json::to_writer_pretty(&mut file, &Settings::default())?;
    file.write_all(b"\n")
}

pub fn load_settings() -> Option<Settings> {
    load_settings_from(&get_settings_path()?)
}

/// `None` for a missing or malformed file.
pub fn load_settings_from(path: &Path) -> Option<Settings> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(settings) => Some(settings),
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "malformed settings ignored");
            None
        }
    }
}

fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg));
        }
    }

    #[cfg(windows)]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return Some(PathBuf::from(appdata));
        }
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config"))
}
