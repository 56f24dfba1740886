//! Classification of outcome lines.
//!
//! An outcome line looks like `<file>:<line>:<test>:<STATUS>:<message>`.

use crate::model::{Outcome, Status};

/// The field separator within outcome lines.
const SEPARATOR: char = ':';

/// The result of classifying one line of a result file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// The line is a well-formed outcome.
    Outcome(Outcome),
    /// The line isn't an outcome; it should be dropped.
    Malformed,
}

impl Line {
    /// Gets the outcome inside this line, if any.
    #[must_use]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Outcome(o) => Some(o),
            Self::Malformed => None,
        }
    }
}

/// Classifies `line`, decorating its display form with `root` if given.
///
/// Lines with fewer than four fields, or whose fourth field isn't exactly a
/// [Status], are [Line::Malformed].
///
/// # Examples
///
/// ```
/// use unity_summary::{model::Status, parse::{classify, Line}};
///
/// let outcome = classify("a/b:1:t:PASS:", Some("R/")).outcome().unwrap();
/// assert_eq!(outcome.status, Status::Pass);
/// assert_eq!(outcome.display, r"R\a\b:1:t:PASS:");
///
/// assert_eq!(classify("no colons here", None), Line::Malformed);
/// ```
pub fn classify(line: &str, root: Option<&str>) -> Line {
    let mut fields = line.splitn(5, SEPARATOR);
    let (source_file, source_line, test_name, status) =
        match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(f), Some(l), Some(t), Some(s)) => (f, l, t, s),
            _ => return Line::Malformed,
        };
    let status = match status.parse::<Status>() {
        Ok(s) => s,
        Err(_) => return Line::Malformed,
    };

    Line::Outcome(Outcome {
        source_file: source_file.to_owned(),
        source_line: source_line.to_owned(),
        test_name: test_name.to_owned(),
        status,
        message: fields.next().unwrap_or_default().to_owned(),
        display: display(line, root),
    })
}

/// Builds the display form of a line: `root` (if non-empty) is prepended, then
/// every forward slash becomes a backslash.
fn display(line: &str, root: Option<&str>) -> String {
    let prefixed = match root {
        Some(root) if !root.is_empty() => format!("{}{}", root, line),
        _ => line.to_owned(),
    };
    prefixed.replace('/', "\\")
}
