//! Parsers for the lines of a Unity result file.
//!
//! Result files contain any number of outcome lines, handled by [line], and
//! exactly one summary line, found by [summary].

pub mod line;
pub mod summary;

pub use line::{classify, Line};
pub use summary::{extract, Overflow};
