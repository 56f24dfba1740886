//! `clap` integration for config.

use std::path;

use super::{err, Config};

/// Clap names for various arguments.
pub mod arg {
    /// Name of the results directory argument.
    pub const RESULTS_DIR: &str = "RESULTS_DIR";
    /// Name of the root path argument.
    pub const ROOT: &str = "ROOT";

    /// Name of the config argument.
    pub const CONFIG: &str = "config";
    /// Name of the dump-config argument.
    pub const DUMP_CONFIG: &str = "dump-config";
}

/// Gets the config file mentioned on the command line, if any.
pub fn config_file(matches: &clap::ArgMatches) -> Option<path::PathBuf> {
    matches.value_of_os(arg::CONFIG).map(path::PathBuf::from)
}

/// Trait for things that can be updated from command line arguments taken from
/// `clap`.
pub trait Clappable: Sized {
    /// Merges configuration from a clap match dictionary into this, potentially
    /// replacing it entirely.
    fn parse_clap(self, matches: &clap::ArgMatches) -> err::Result<Self>;
}

/// We can fill a top-level config using clap.
impl Clappable for Config {
    fn parse_clap(self, matches: &clap::ArgMatches) -> err::Result<Self> {
        Ok(Self {
            results_dir: matches
                .value_of_os(arg::RESULTS_DIR)
                .map_or(self.results_dir, path::PathBuf::from),
            root: matches
                .value_of(arg::ROOT)
                .map(ToOwned::to_owned)
                .or(self.root),
            pattern: self.pattern,
        })
    }
}
