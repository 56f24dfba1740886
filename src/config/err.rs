//! Errors that can occur during configuration.
use std::path::PathBuf;
use thiserror::Error;

/// A configuration error.
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't read a config file.
    #[error("couldn't read config file {}", .path.display())]
    Read {
        /// The config file we tried to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// We couldn't work out the current directory, to use as the default root.
    #[error("couldn't get current directory")]
    CurrentDir(#[source] std::io::Error),

    /// We couldn't deserialise the config from TOML.
    #[error("couldn't parse config: {0}")]
    Deserialize(#[from] toml::de::Error),

    /// We couldn't serialise the config to TOML.
    #[error("couldn't dump config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Results over [Error].
pub type Result<T> = std::result::Result<T, Error>;
