use super::{err, io};
use crate::discover;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The default directory to search for result files.
const DEFAULT_RESULTS_DIR: &str = "./";

/// The default glob, relative to the results directory, for result files.
pub const DEFAULT_PATTERN: &str = "**/*.test*";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// The top-level config structure.
pub struct Config {
    /// The directory in which to look for result files.
    pub results_dir: PathBuf,
    /// The prefix to prepend to display lines.
    ///
    /// If unset, the current directory is used.
    pub root: Option<String>,
    /// The glob, relative to `results_dir`, matching result files.
    pub pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            root: None,
            pattern: DEFAULT_PATTERN.to_owned(),
        }
    }
}

impl Config {
    /// Tries to dump a config to a string.
    pub fn to_string(&self) -> err::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Tries to load a config from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> err::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Gets the root prefix, falling back to the current directory.
    pub fn root_or_default(&self) -> err::Result<String> {
        self.root.clone().map_or_else(io::default_root, Ok)
    }

    /// Gets the full glob used to find result files.
    pub fn glob(&self) -> String {
        discover::resolve_glob(&self.results_dir, &self.pattern)
    }
}
