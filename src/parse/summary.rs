//! Extraction of the summary line from a result file.

use crate::model::Summary;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

/// Matches a Unity summary line, such as `12 Tests 1 Failures 2 Ignored`.
///
/// Digits are deliberately ASCII-only; `\d` would also accept other scripts.
static SUMMARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+) Tests ([0-9]+) Failures ([0-9]+) Ignored")
        .expect("summary pattern is valid")
});

/// The first summary line held a count too large to represent.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("summary count out of range: {0}")]
pub struct Overflow(pub String);

/// Finds the first summary line in `lines`, returning its counts.
///
/// Returns `Ok(None)` if no line matches.  Scanning stops at the first line
/// matching the pattern; if that line's counts don't fit, the result is an
/// [Overflow] rather than a later line.
///
/// # Examples
///
/// ```
/// use unity_summary::{model::Summary, parse::extract};
///
/// let lines = vec!["foo.c:1:test:PASS:", "-----", "1 Tests 0 Failures 0 Ignored", "OK"];
/// assert_eq!(extract(lines), Ok(Some(Summary::new(1, 0, 0))));
/// assert_eq!(extract(vec!["OK"]), Ok(None));
/// ```
pub fn extract<'a>(
    lines: impl IntoIterator<Item = &'a str>,
) -> Result<Option<Summary>, Overflow> {
    lines
        .into_iter()
        .find_map(|line| SUMMARY.captures(line))
        .map(|caps| parse_captures(&caps))
        .transpose()
}

fn parse_captures(caps: &Captures) -> Result<Summary, Overflow> {
    let count = |i: usize| -> Result<u64, Overflow> {
        caps[i].parse().map_err(|_| Overflow(caps[i].to_owned()))
    };
    Ok(Summary::new(count(1)?, count(2)?, count(3)?))
}
