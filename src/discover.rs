//! Discovery of result files on disk.

use glob::glob;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while discovering result files.
#[derive(Debug, Error)]
pub enum Error {
    /// The glob pattern was malformed.
    #[error("bad result file pattern: {pattern}")]
    BadPattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying glob error.
        source: glob::PatternError,
    },

    /// Nothing matched the glob pattern.
    #[error("No *.testpass, *.testfail, or *.testresults files found in '{0}'")]
    NoResults(String),
}

/// Shorthand for a result over [Error]s.
pub type Result<T> = std::result::Result<T, Error>;

/// Finds every regular file matching `pattern`, sorted by path.
///
/// Unreadable directory entries are skipped.  Finding no files at all is an
/// error, as there would be nothing to summarise.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|source| Error::BadPattern {
            pattern: pattern.to_owned(),
            source,
        })?
        .filter_map(std::result::Result::ok)
        .filter(|p| p.is_file())
        .collect();

    if paths.is_empty() {
        return Err(Error::NoResults(pattern.to_owned()));
    }
    paths.sort();
    tracing::debug!(pattern, count = paths.len(), "discovered result files");
    Ok(paths)
}

/// Resolves a glob pattern relative to a root directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use unity_summary::discover::resolve_glob;
///
/// assert_eq!(resolve_glob(Path::new("results"), "*.test*"), "results/*.test*");
/// ```
pub fn resolve_glob(root: &Path, pattern: &str) -> String {
    root.join(pattern).to_string_lossy().into_owned()
}
