use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use strata_codec::CodecSpec;
use strata_io::StoreConfig;

/// Settings file for the `strata` binary.
///
/// ```toml
/// chain = ["reverse", "crc32"]
///
/// [store]
/// root = "/var/lib/strata"
/// sync_on_close = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Codecs in write order.
    pub chain: Vec<CodecSpec>,
    pub store: StoreConfig,
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// The chain to compose; an empty chain means raw access.
    pub fn effective_chain(&self) -> Vec<CodecSpec> {
        if self.chain.is_empty() {
            vec![CodecSpec::Identity]
        } else {
            self.chain.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_is_raw_access() {
        let c = CliConfig::default();
        assert!(c.chain.is_empty());
        assert_eq!(c.effective_chain(), vec![CodecSpec::Identity]);
        assert_eq!(c.store, StoreConfig::default());
    }

    #[test]
    fn load_chain_and_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strata.toml");
        std::fs::write(
            &path,
            "chain = [\"hex\", \"crc32\"]\n\n[store]\nroot = \"/data\"\nbuffer_size = 64\n",
        )
        .unwrap();
        let c = CliConfig::load(&path).unwrap();
        assert_eq!(c.effective_chain(), vec![CodecSpec::Hex, CodecSpec::Crc32]);
        assert_eq!(c.store.root, PathBuf::from("/data"));
        assert_eq!(c.store.buffer_size, 64);
        assert!(c.store.create_dirs);
    }

    #[test]
    fn unknown_codec_in_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strata.toml");
        std::fs::write(&path, "chain = [\"zstd\"]\n").unwrap();
        assert!(CliConfig::load(&path).is_err());
    }
}
