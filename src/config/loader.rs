use std::fs;
use std::path::{Path, PathBuf};

use super::SecondmaxConfig;
use crate::errors::ConfigError;

/// Looked up in the current directory when no explicit path is given
pub const CONFIG_FILE_NAME: &str = ".secondmax.toml";

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str, path: &Path) -> Result<SecondmaxConfig, ConfigError> {
    toml::from_str::<SecondmaxConfig>(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration.
///
/// An explicit path must exist and parse. Without one, `.secondmax.toml` in
/// `dir` is used when present; a broken implicit file falls back to defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<SecondmaxConfig, ConfigError> {
    if let Some(path) = explicit {
        let config = parse_config(&read_config_file(path)?, path)?;
        log::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let implicit: PathBuf = dir.join(CONFIG_FILE_NAME);
    match read_config_file(&implicit) {
        Ok(contents) => match parse_config(&contents, &implicit) {
            Ok(config) => {
                log::debug!("Loaded config from {}", implicit.display());
                Ok(config)
            }
            Err(e) => {
                log::warn!("{}. Using defaults.", e);
                Ok(SecondmaxConfig::default())
            }
        },
        Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(SecondmaxConfig::default())
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            Ok(SecondmaxConfig::default())
        }
    }
}
