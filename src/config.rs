//! Top-level configuration for the summariser.
//!
//! The library's [Summariser](crate::run::Summariser) can be used without
//! pulling in this configuration layer, but it provides a convenient
//! substrate for the command-line tool: defaults, overlaid by an optional
//! TOML file, overlaid by command-line arguments.

pub mod clap;
pub mod err;
pub mod io;
pub mod top;

pub use err::{Error, Result};
pub use top::Config;
