//! Error types for outputting reports.
use thiserror::Error;

/// Enumeration of possible outputting errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A general I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Shorthand for a result over [Error]s.
pub type Result<T> = std::result::Result<T, Error>;
