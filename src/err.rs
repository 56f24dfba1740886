//! Errors that can abort a summary run.

use std::path::PathBuf;
use thiserror::Error;

/// Enumeration of errors that can happen while summarising result files.
///
/// Every one of these is fatal to the whole run: no report is produced once
/// any file fails.
#[derive(Debug, Error)]
pub enum Error {
    /// A result file had no lines at all.
    #[error("Empty test result file: {}", .0.display())]
    EmptyFile(PathBuf),

    /// A result file had no summary line.
    #[error("Couldn't parse test results: {}", .0.display())]
    SummaryMissing(PathBuf),

    /// A result file's summary line held a count too large to represent.
    #[error("Couldn't parse test results: {}: {}", .path.display(), .source)]
    SummaryOverflow {
        /// The file holding the summary.
        path: PathBuf,
        /// The offending count.
        source: crate::parse::Overflow,
    },

    /// A result file couldn't be read.
    #[error("Couldn't read test result file: {}", .path.display())]
    Read {
        /// The file we tried to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Shorthand for a result over [Error]s.
pub type Result<T> = std::result::Result<T, Error>;
