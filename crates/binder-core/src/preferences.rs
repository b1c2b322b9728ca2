//! User preferences persisted as JSON in the platform config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const FILE_NAME: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Open the working directory's readme as the first tab at launch.
    pub open_readme_on_startup: bool,
    pub readme_file_name: String,
    pub window_width: f64,
    pub window_height: f64,
    pub font_size: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            open_readme_on_startup: true,
            readme_file_name: "README.md".to_string(),
            window_width: 900.0,
            window_height: 700.0,
            font_size: 14.0,
        }
    }
}

impl Preferences {
    /// `<config dir>/preferences.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "Binder", "Binder").map(|dirs| dirs.config_dir().join(FILE_NAME))
    }

    /// Read preferences from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(Error::Preferences {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Like [`Preferences::load_from`], but any problem is logged and the
    /// defaults are used instead.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        Self::load_from(path).unwrap_or_else(|err| {
            warn!("using default preferences: {}", err);
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source: io::Error| Error::Preferences {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(io_err)
    }
}
