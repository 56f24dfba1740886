//! Model types for test outcomes, file summaries, and aggregate reports.

pub mod outcome;
pub mod report;
pub mod summary;

pub use outcome::{Outcome, Status};
pub use report::{FileReport, Report};
pub use summary::Summary;
