//! Endpoints for outputting a finished report to the user.
//!
//! Generally, one will [text::render] a report directly, or construct an
//! [Outputter] against a writer and output through it.

pub mod abs;
pub mod err;
pub mod text;

pub use abs::Outputter;
pub use err::{Error, Result};
pub use text::Text;
