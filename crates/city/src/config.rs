//! Renderer configuration. Loaded from city.ron at startup.

use procgen::CityLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persistent render settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityConfig {
    /// Where the SVG is written, relative to the working directory.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Number of twinkling stars in the sky band.
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    #[serde(default)]
    pub layout: CityLayout,
}

fn default_output() -> PathBuf {
    PathBuf::from("profile-3d-contrib/contribution-city.svg")
}
fn default_star_count() -> usize {
    50
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            star_count: default_star_count(),
            layout: CityLayout::default(),
        }
    }
}

impl CityConfig {
    /// Load config from `path`. If the file is missing or invalid, returns default config.
    pub fn load(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match Self::parse(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        } else {
            log::debug!("No config at {:?}, using defaults", path);
        }
        Self::default()
    }

    pub fn parse(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }
}

/// `city.ron` in the current directory.
pub fn default_config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("city.ron")
}
