/// Knobs for a single parse invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Keep parsing after a failed statement by skipping to the next
    /// statement boundary. When `false`, parsing stops at the first failure.
    pub recover: bool,
    /// Stop once this many diagnostics have been reported.
    pub max_errors: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            recover: true,
            max_errors: None,
        }
    }
}

impl ParserConfig {
    pub fn with_recover(mut self, recover: bool) -> Self {
        self.recover = recover;
        self
    }

    pub fn with_max_errors(mut self, max_errors: Option<usize>) -> Self {
        self.max_errors = max_errors;
        self
    }

    pub(crate) fn error_limit_reached(&self, reported: usize) -> bool {
        self.max_errors.is_some_and(|max| reported >= max)
    }
}
