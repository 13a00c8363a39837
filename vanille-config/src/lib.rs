use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub mod crafting;
pub mod logging;

pub use crafting::CraftingConfig;
pub use logging::LoggingConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file at {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Couldn't parse config at {path:?}. Reason: {}. This is probably caused by a config update, just delete the old config and reload the plugin", .source.message())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Couldn't write configuration file at {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}

/// Vanille should match vanilla crafting by default; everything here only tunes how
/// the plugin runs, never which recipes match.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct VanilleConfiguration {
    pub logging: LoggingConfig,
    pub crafting: CraftingConfig,
}

pub trait LoadTomlConfiguration {
    /// Reads the configuration from `folder`, writing the defaults there first if the
    /// file does not exist yet.
    fn load(folder: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = folder.join(Self::file_name());

        if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            return toml::from_str(&file_content).map_err(|source| ConfigError::Parse { path, source });
        }

        let content = Self::default();
        if let Err(err) = content.save(folder) {
            warn!("Couldn't write default config to {:?}. Reason: {}", path, err);
        }
        Ok(content)
    }

    fn save(&self, folder: &Path) -> Result<(), ConfigError>
    where
        Self: Serialize,
    {
        let path = folder.join(Self::file_name());
        let content = toml::to_string(self)?;
        fs::write(&path, content).map_err(|source| ConfigError::Write { path, source })
    }

    fn file_name() -> &'static str;
}

impl LoadTomlConfiguration for VanilleConfiguration {
    fn file_name() -> &'static str {
        "config.toml"
    }
}
