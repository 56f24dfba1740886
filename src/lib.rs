//! Summarises the result files written by the Unity C test framework.
//!
//! Each result file holds outcome lines (`file:line:test:STATUS:message`) and
//! one summary line (`N Tests N Failures N Ignored`).  [run::Summariser] folds
//! any number of these into a [model::Report], which [ux::out::text] renders
//! in Unity's classic summary layout.

pub mod config;
pub mod discover;
pub mod err;
pub mod model;
pub mod parse;
pub mod run;
pub mod ux;

pub use err::{Error, Result};
pub use run::{summarise, Summariser};
