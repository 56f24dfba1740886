//! The high-level summariser, folding result files into a report.

use crate::{
    err::{Error, Result},
    model::{FileReport, Report},
    parse::{self, Line},
    ux::out::text,
};
use std::{fs, path::Path};

/// Summarises Unity result files into a [Report].
#[derive(Clone, Debug, Default)]
pub struct Summariser {
    /// The prefix to prepend to display lines, if any.
    root: Option<String>,
}

impl Summariser {
    /// Constructs a summariser with no root prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root prefix prepended to every display line.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Reads and summarises each file in `paths`, in order.
    ///
    /// Stops at the first file that can't be read, is empty, or has no
    /// usable summary line; in that case no report is produced at all.
    pub fn run<P: AsRef<Path>>(&self, paths: impl IntoIterator<Item = P>) -> Result<Report> {
        paths
            .into_iter()
            .try_fold(Report::default(), |report, path| {
                Ok(report.merge(self.summarise_path(path.as_ref())?))
            })
    }

    /// Reads and summarises a single result file.
    pub fn summarise_path(&self, path: &Path) -> Result<FileReport> {
        let contents = read(path)?;
        let lines: Vec<&str> = contents.lines().collect();
        self.summarise_lines(path, &lines)
    }

    /// Summarises the already-read lines of the result file at `path`.
    ///
    /// `path` is used only for error reporting and logging.
    pub fn summarise_lines(&self, path: &Path, lines: &[&str]) -> Result<FileReport> {
        if lines.is_empty() {
            return Err(Error::EmptyFile(path.to_owned()));
        }

        let summary = parse::extract(lines.iter().copied())
            .map_err(|source| Error::SummaryOverflow {
                path: path.to_owned(),
                source,
            })?
            .ok_or_else(|| Error::SummaryMissing(path.to_owned()))?;

        let mut file = FileReport::new(summary);
        let mut dropped = 0_usize;
        for line in lines {
            match parse::classify(line, self.root.as_deref()) {
                Line::Outcome(outcome) => file.push(outcome),
                Line::Malformed => dropped += 1,
            }
        }

        tracing::debug!(
            path = %path.display(),
            tests = summary.tests,
            failures = summary.failures,
            ignored = summary.ignored,
            dropped,
            "summarised result file"
        );
        Ok(file)
    }
}

/// Summarises every file in `paths` with the given `root` prefix, and renders
/// the resulting report as text.
pub fn summarise<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
    root: Option<&str>,
) -> Result<String> {
    let summariser = root.map_or_else(Summariser::new, |r| Summariser::new().with_root(r));
    Ok(text::render(&summariser.run(paths)?))
}

/// Reads a result file in full, tolerating invalid UTF-8.
fn read(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
