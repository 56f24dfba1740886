//! The [Summary] type, holding the counts from a result file's summary line.

/// The counts stated by a single result file's summary line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Summary {
    /// Total number of tests run.
    pub tests: u64,
    /// Number of failing tests.
    pub failures: u64,
    /// Number of ignored tests.
    pub ignored: u64,
}

impl Summary {
    /// Constructs a summary from its three counts.
    #[must_use]
    pub const fn new(tests: u64, failures: u64, ignored: u64) -> Self {
        Self {
            tests,
            failures,
            ignored,
        }
    }

    /// Gets the number of passing tests implied by this summary.
    ///
    /// Unity doesn't state this directly, so it is derived from the other
    /// counts.  Nothing stops a summary line from being inconsistent, in
    /// which case this can be negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use unity_summary::model::Summary;
    /// assert_eq!(Summary::new(10, 2, 3).passed(), 5);
    /// assert_eq!(Summary::new(1, 2, 3).passed(), -4);
    /// ```
    #[must_use]
    pub fn passed(&self) -> i128 {
        i128::from(self.tests) - i128::from(self.failures) - i128::from(self.ignored)
    }
}
