//! User-facing parts of the summariser.

pub mod out;
