//! Configuration file loading and saving

use crate::config::types::SiteConfig;
use crate::error::{ConfigError, ConfigResult};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Configuration file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Handle to the configuration file a command reads and writes
///
/// Every mutating command does a full read-modify-write through this handle.
/// Nothing coordinates two processes sharing one file: the last write wins.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ConfigStore { path: path.into() }
    }

    /// Store backed by `config.json` in the current directory
    pub fn in_working_dir() -> Self {
        Self::new(CONFIG_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> ConfigResult<SiteConfig> {
        load_config(&self.path)
    }

    pub fn save(&self, config: &SiteConfig) -> ConfigResult<()> {
        save_config(config, &self.path)
    }
}

/// Load the configuration at `path`
///
/// A missing file is not an error: the default record is written to `path`
/// and returned.
pub fn load_config(path: &Path) -> ConfigResult<SiteConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let config = SiteConfig::default();
            save_config(&config, path)?;
            return Ok(config);
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the whole record to `path`, replacing any previous content
pub fn save_config(config: &SiteConfig, path: &Path) -> ConfigResult<()> {
    let json = to_pretty_json(config)?;
    fs::write(path, json).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Render any serializable value as JSON indented by four spaces
pub fn to_pretty_json<T: Serialize>(value: &T) -> ConfigResult<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
