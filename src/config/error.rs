//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file path not set
    #[error("Configuration file path not set")]
    FilePathNotSet,

    /// Home directory could not be found
    #[error("Home directory could not be found")]
    HomeDirectoryNotFound,

    /// Failed to create config directory
    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to load config file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to deserialize config file
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationFailed(String),

    /// Failed to serialize config data
    #[error("Failed to serialize configuration: {0}")]
    SerializationFailed(String),

    /// Failed to save config file
    #[error("Failed to save configuration to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::FilePathNotSet;
        assert!(error.to_string().contains("file path not set"));

        let error = ConfigError::HomeDirectoryNotFound;
        assert!(error.to_string().contains("Home directory"));

        let error = ConfigError::DeserializationFailed("bad yaml".to_string());
        assert!(error.to_string().contains("deserialize"));
        assert!(error.to_string().contains("bad yaml"));

        let error = ConfigError::LoadFailed {
            path: PathBuf::from("/tmp/config.yml"),
            message: "IO error".to_string(),
        };
        assert!(error.to_string().contains("/tmp/config.yml"));
        assert!(error.to_string().contains("IO error"));
    }
}
