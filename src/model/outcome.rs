//! Outcomes of individual tests, as recorded in Unity result files.

use std::{fmt::Display, str::FromStr};

/// The status of a single test, as reported on an outcome line.
///
/// Statuses are ordered in the same order their report sections appear.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// The test passed.
    Pass,
    /// The test was ignored.
    Ignore,
    /// The test failed.
    Fail,
}

/// String representations for statuses.
pub mod string {
    /// String representation for pass statuses.
    pub const PASS: &str = "PASS";
    /// String representation for ignore statuses.
    pub const IGNORE: &str = "IGNORE";
    /// String representation for fail statuses.
    pub const FAIL: &str = "FAIL";
}

/// We can produce a string representation of the status.
///
/// # Examples
///
/// ```
/// use unity_summary::model::Status;
/// assert_eq!(Status::Pass.to_string(), "PASS");
/// assert_eq!(Status::Fail.to_string(), "FAIL");
/// assert_eq!(Status::Ignore.to_string(), "IGNORE");
/// ```
impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Pass => string::PASS,
                Self::Ignore => string::IGNORE,
                Self::Fail => string::FAIL,
            }
        )
    }
}

/// We can parse a string representation of a status.  Unlike most parsers
/// in this crate, parsing is case sensitive: Unity only ever emits upper-case
/// statuses, and anything else marks a line we don't understand.
///
/// # Examples
///
/// ```
/// use unity_summary::model::Status;
/// assert_eq!(str::parse::<Status>("PASS"), Ok(Status::Pass));
/// assert_eq!(str::parse::<Status>("IGNORE"), Ok(Status::Ignore));
/// assert!(str::parse::<Status>("pass").is_err());
/// ```
impl FromStr for Status {
    /// Errors just take ownership of the invalid string.
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            string::PASS => Ok(Self::Pass),
            string::IGNORE => Ok(Self::Ignore),
            string::FAIL => Ok(Self::Fail),
            _ => Err(s.to_owned()),
        }
    }
}

impl Status {
    /// Gets an iterator of each [Status], in report order.
    pub fn all() -> impl Iterator<Item = Self> {
        vec![Self::Pass, Self::Ignore, Self::Fail].into_iter()
    }
}

/// A single classified outcome line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The C source file containing the test.
    pub source_file: String,
    /// The line within the source file; Unity doesn't guarantee this is numeric.
    pub source_line: String,
    /// The name of the test function.
    pub test_name: String,
    /// The test's status.
    pub status: Status,
    /// Everything after the status field, if anything.
    pub message: String,
    /// The line as it should appear in the final report.
    pub display: String,
}
