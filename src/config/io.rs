//! Functions for loading config from the environment and from files.

use super::{err, Config};
use std::{fs, path};

/// Loads a config from the TOML file at `path`.
pub fn load(path: &path::Path) -> err::Result<Config> {
    let contents = fs::read_to_string(path).map_err(|source| err::Error::Read {
        path: path.to_owned(),
        source,
    })?;
    Config::from_str(&contents)
}

/// Gets the default root prefix: the current directory, with a trailing
/// separator so that it can be prepended straight onto relative paths.
pub fn default_root() -> err::Result<String> {
    let cwd = std::env::current_dir().map_err(err::Error::CurrentDir)?;
    let mut root = cwd.to_string_lossy().into_owned();
    if !root.ends_with('/') {
        root.push('/');
    }
    Ok(root)
}
