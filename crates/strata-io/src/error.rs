/// Errors from loading a store configuration or resolving a store from it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error while reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A store name that is empty or escapes the configured root.
    #[error("invalid store name: {0:?}")]
    InvalidName(String),
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
