//! The [Report] type, and the per-file [FileReport] folded into it.

use super::{outcome::Status, Outcome, Summary};
use std::vec::Vec;

/// Everything extracted from a single result file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Display lines of passing outcomes, in file order.
    pub successes: Vec<String>,
    /// Display lines of ignored outcomes, in file order.
    pub ignores: Vec<String>,
    /// Display lines of failing outcomes, in file order.
    pub failures: Vec<String>,
    /// The file's summary counts.
    pub summary: Summary,
}

impl FileReport {
    /// Constructs an empty file report over `summary`.
    #[must_use]
    pub fn new(summary: Summary) -> Self {
        Self {
            summary,
            ..Self::default()
        }
    }

    /// Files an outcome into the display-line list matching its status.
    pub fn push(&mut self, outcome: Outcome) {
        let lines = match outcome.status {
            Status::Pass => &mut self.successes,
            Status::Ignore => &mut self.ignores,
            Status::Fail => &mut self.failures,
        };
        lines.push(outcome.display);
    }
}

/// The aggregate report over every result file in a run.
///
/// Totals come only from summary lines; the display-line lists come only from
/// outcome lines.  The two are never reconciled against each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Display lines of passing outcomes, in file-then-line order.
    pub passed: Vec<String>,
    /// Display lines of ignored outcomes, in file-then-line order.
    pub ignored: Vec<String>,
    /// Display lines of failing outcomes, in file-then-line order.
    pub failed: Vec<String>,
    /// Sum of every file's test count.
    pub total_tests: u128,
    /// Sum of every file's failure count.
    pub total_failures: u128,
    /// Sum of every file's ignored count.
    pub total_ignored: u128,
    /// Sum of every file's derived pass count; see [Summary::passed].
    pub total_passed: i128,
}

impl Report {
    /// Folds one file's contribution onto the end of this report.
    ///
    /// # Examples
    ///
    /// ```
    /// use unity_summary::model::{FileReport, Report, Summary};
    ///
    /// let report = Report::default()
    ///     .merge(FileReport::new(Summary::new(3, 1, 1)))
    ///     .merge(FileReport::new(Summary::new(2, 0, 0)));
    /// assert_eq!(report.total_tests, 5);
    /// assert_eq!(report.total_passed, 3);
    /// ```
    #[must_use]
    pub fn merge(mut self, file: FileReport) -> Self {
        self.insert(file);
        self
    }

    /// Adds one file's contribution to the report, updating totals accordingly.
    pub fn insert(&mut self, file: FileReport) {
        let FileReport {
            successes,
            ignores,
            failures,
            summary,
        } = file;

        self.passed.extend(successes);
        self.ignored.extend(ignores);
        self.failed.extend(failures);

        self.total_tests += u128::from(summary.tests);
        self.total_failures += u128::from(summary.failures);
        self.total_ignored += u128::from(summary.ignored);
        self.total_passed += summary.passed();
    }

    /// Gets the display lines recorded for `status`.
    #[must_use]
    pub fn lines(&self, status: Status) -> &[String] {
        match status {
            Status::Pass => &self.passed,
            Status::Ignore => &self.ignored,
            Status::Fail => &self.failed,
        }
    }

    /// Gets whether the report has a section for `status`.
    ///
    /// This depends on the summary totals, not on whether any outcome lines
    /// were seen.
    #[must_use]
    pub fn has_section(&self, status: Status) -> bool {
        match status {
            Status::Pass => 0 < self.total_passed,
            Status::Ignore => 0 < self.total_ignored,
            Status::Fail => 0 < self.total_failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: Status, display: &str) -> Outcome {
        Outcome {
            source_file: "test.c".to_owned(),
            source_line: "1".to_owned(),
            test_name: "test".to_owned(),
            status,
            message: String::new(),
            display: display.to_owned(),
        }
    }

    #[test]
    /// Outcomes land in the list for their status.
    fn test_file_report_push() {
        let mut file = FileReport::new(Summary::new(3, 1, 1));
        file.push(outcome(Status::Fail, "f"));
        file.push(outcome(Status::Pass, "p"));
        file.push(outcome(Status::Ignore, "i"));

        assert_eq!(file.successes, vec!["p"]);
        assert_eq!(file.ignores, vec!["i"]);
        assert_eq!(file.failures, vec!["f"]);
    }

    #[test]
    /// Lines from later files go after lines from earlier ones.
    fn test_merge_preserves_file_order() {
        let mut first = FileReport::new(Summary::new(2, 0, 0));
        first.push(outcome(Status::Pass, "a1"));
        first.push(outcome(Status::Pass, "a2"));
        let mut second = FileReport::new(Summary::new(1, 0, 0));
        second.push(outcome(Status::Pass, "b1"));

        let report = Report::default().merge(first).merge(second);
        assert_eq!(report.passed, vec!["a1", "a2", "b1"]);
        assert_eq!(report.lines(Status::Pass), &report.passed[..]);
    }

    #[test]
    /// Totals always satisfy tests = passed + failures + ignored.
    fn test_totals_balance() {
        let report = vec![
            Summary::new(10, 2, 3),
            Summary::new(4, 4, 0),
            Summary::new(0, 0, 0),
        ]
        .into_iter()
        .map(FileReport::new)
        .fold(Report::default(), Report::merge);

        assert_eq!(report.total_tests, 14);
        assert_eq!(report.total_failures, 6);
        assert_eq!(report.total_ignored, 3);
        assert_eq!(report.total_passed, 5);
        assert_eq!(
            report.total_tests as i128,
            report.total_passed + report.total_failures as i128 + report.total_ignored as i128
        );
    }

    #[test]
    /// Inconsistent summaries propagate a negative pass count, and hide the
    /// passed section.
    fn test_negative_passed() {
        let report = Report::default().merge(FileReport::new(Summary::new(1, 1, 1)));
        assert_eq!(report.total_passed, -1);
        assert!(!report.has_section(Status::Pass));
        assert!(report.has_section(Status::Ignore));
        assert!(report.has_section(Status::Fail));
    }

    #[test]
    /// Summary totals decide sections, even when no outcome lines were seen.
    fn test_section_without_lines() {
        let report = Report::default().merge(FileReport::new(Summary::new(2, 0, 0)));
        assert!(report.has_section(Status::Pass));
        assert!(report.lines(Status::Pass).is_empty());
    }
}
