use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::file::{self, FileStore};

/// Settings for resolving named [`FileStore`]s under a root directory.
///
/// ```toml
/// root = "/var/lib/strata"
/// create_dirs = true
/// sync_on_close = false
/// buffer_size = 8192
/// ```
///
/// Missing keys fall back to [`StoreConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub root: PathBuf,
    pub create_dirs: bool,
    pub sync_on_close: bool,
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            create_dirs: true,
            sync_on_close: false,
            buffer_size: file::DEFAULT_BUFFER_SIZE,
        }
    }
}

impl StoreConfig {
    /// Read a TOML configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse a TOML configuration.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Resolve the store called `name` under [`root`](Self::root).
    ///
    /// Names are relative paths made only of normal components; `..`,
    /// absolute paths and empty names are rejected.
    pub fn file_store(&self, name: &str) -> ConfigResult<FileStore> {
        let relative = Path::new(name);
        let well_formed = !name.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !well_formed {
            return Err(ConfigError::InvalidName(name.to_string()));
        }
        Ok(FileStore::new(self.root.join(relative))
            .create_dirs(self.create_dirs)
            .sync_on_close(self.sync_on_close)
            .buffer_size(self.buffer_size))
    }
}
