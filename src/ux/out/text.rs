//! The plain-text outputter, producing Unity's classic summary layout.

use super::{abs::Outputter, err};
use crate::model::{Report, Status};
use std::io::Write;

/// The line above and below each section title.
const RULE: &str = "--------------------------";

/// Title of the overall totals section.
const OVERALL_TITLE: &str = "OVERALL UNITY TEST SUMMARY";

/// Gets the title of the section listing outcomes with `status`.
fn title(status: Status) -> &'static str {
    match status {
        Status::Pass => "UNITY PASSED TEST SUMMARY",
        Status::Ignore => "UNITY IGNORED TEST SUMMARY",
        Status::Fail => "UNITY FAILED TEST SUMMARY",
    }
}

/// Renders `report` as text.
///
/// The passed, ignored, and failed sections appear in that order, each only
/// when its total is positive; the overall section always appears last.
///
/// # Examples
///
/// ```
/// use unity_summary::{model::Report, ux::out::text::render};
///
/// let text = render(&Report::default());
/// assert!(!text.contains("UNITY PASSED TEST SUMMARY"));
/// assert!(text.contains("0 TOTAL TESTS 0 TOTAL FAILURES 0 IGNORED"));
/// ```
pub fn render(report: &Report) -> String {
    let mut out = String::from("\n");

    for status in Status::all().filter(|s| report.has_section(*s)) {
        // The passed section sits directly under the opening blank line.
        if status != Status::Pass {
            out.push('\n');
        }
        push_section(&mut out, title(status), &report.lines(status).join("\n"));
    }

    out.push('\n');
    push_section(
        &mut out,
        OVERALL_TITLE,
        &format!(
            "{} TOTAL TESTS {} TOTAL FAILURES {} IGNORED",
            report.total_tests, report.total_failures, report.total_ignored
        ),
    );
    out.push('\n');
    out
}

fn push_section(out: &mut String, title: &str, body: &str) {
    for line in &[RULE, title, RULE, body] {
        out.push_str(line);
        out.push('\n');
    }
}

/// An outputter that writes the text rendering of a report.
pub struct Text<W> {
    w: W,
}

impl<W: Write> Outputter for Text<W> {
    fn output(mut self: Box<Self>, report: &Report) -> err::Result<()> {
        self.w.write_all(render(report).as_bytes())?;
        self.w.flush()?;
        Ok(())
    }
}

impl<W: Write> Text<W> {
    /// Constructs a new text outputter over `writer`.
    pub fn new(writer: W) -> Self {
        Self { w: writer }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report(passed: &[&str], ignored: &[&str], failed: &[&str]) -> Report {
        let strings =
            |xs: &[&str]| -> Vec<String> { xs.iter().map(|x| x.to_string()).collect() };
        Report {
            passed: strings(passed),
            ignored: strings(ignored),
            failed: strings(failed),
            total_tests: (passed.len() + ignored.len() + failed.len()) as u128,
            total_failures: failed.len() as u128,
            total_ignored: ignored.len() as u128,
            total_passed: passed.len() as i128,
        }
    }

    #[test]
    /// A report with every section renders all four, in order.
    fn test_render_all_sections() {
        let got = render(&report(&["p1", "p2"], &["i1"], &["f1"]));
        let want = "
--------------------------
UNITY PASSED TEST SUMMARY
--------------------------
p1
p2

--------------------------
UNITY IGNORED TEST SUMMARY
--------------------------
i1

--------------------------
UNITY FAILED TEST SUMMARY
--------------------------
f1

--------------------------
OVERALL UNITY TEST SUMMARY
--------------------------
4 TOTAL TESTS 1 TOTAL FAILURES 1 IGNORED

";
        assert_eq!(got, want)
    }

    #[test]
    /// With no ignores, the ignored section is absent with no placeholder.
    fn test_render_omits_ignored() {
        let got = render(&report(&["p1"], &[], &["f1", "f2"]));
        let want = "
--------------------------
UNITY PASSED TEST SUMMARY
--------------------------
p1

--------------------------
UNITY FAILED TEST SUMMARY
--------------------------
f1
f2

--------------------------
OVERALL UNITY TEST SUMMARY
--------------------------
3 TOTAL TESTS 2 TOTAL FAILURES 0 IGNORED

";
        assert_eq!(got, want);
        assert!(!got.contains("IGNORED TEST SUMMARY"));
    }

    #[test]
    /// Without passes, later sections keep their leading blank line.
    fn test_render_no_passes() {
        let got = render(&report(&[], &[], &["f1"]));
        let want = "

--------------------------
UNITY FAILED TEST SUMMARY
--------------------------
f1

--------------------------
OVERALL UNITY TEST SUMMARY
--------------------------
1 TOTAL TESTS 1 TOTAL FAILURES 0 IGNORED

";
        assert_eq!(got, want)
    }

    #[test]
    /// A positive count with no outcome lines still gets a (blank) section.
    fn test_render_section_without_lines() {
        let mut r = report(&[], &[], &[]);
        r.total_tests = 3;
        r.total_passed = 3;
        let got = render(&r);
        let want = "
--------------------------
UNITY PASSED TEST SUMMARY
--------------------------


--------------------------
OVERALL UNITY TEST SUMMARY
--------------------------
3 TOTAL TESTS 0 TOTAL FAILURES 0 IGNORED

";
        assert_eq!(got, want)
    }

    #[test]
    /// The text outputter writes exactly the rendering.
    fn test_text_outputter() {
        let r = report(&["p1"], &["i1"], &[]);
        let mut buf = Vec::new();
        Box::new(Text::new(&mut buf)).output(&r).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render(&r))
    }
}
