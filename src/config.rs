//! Configuration loading
//!
//! Reads `~/.config/hovertip/config.toml`. A missing file yields defaults;
//! an unreadable or malformed file also yields defaults, with a warning the
//! caller can surface.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, GeometryConfig, SurfaceConfig, TimingConfig};

use crate::error::HovertipError;

const CONFIG_DIR: &str = "hovertip";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the user config
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    };

    match load_config_from_path(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(HovertipError::Io(e)) if e.kind() == ErrorKind::NotFound => ConfigResult {
            config: Config::default(),
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{}: {}", path.display(), e)),
            }
        }
    }
}

/// Load a config file, reporting every failure
pub fn load_config_from_path(path: &Path) -> Result<Config, HovertipError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(content: &str) -> Result<Config, HovertipError> {
    toml::from_str::<Config>(content).map_err(|e| HovertipError::InvalidConfig(e.message().to_string()))
}
