use std::slice::Iter;

use tracing::debug;

use super::errors::{DiagnosticRecord, Error};

/// Collects parse errors in the order they were reported.
///
/// Nothing here unwinds or prints; rendering is left to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reporter {
    errors: Vec<Error>,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Records an error after every error reported before it.
    ///
    /// # Arguments
    ///
    /// * `error` - The diagnostic to record
    pub fn report(&mut self, error: Error) {
        debug!(
            name = error.get_error_name(),
            token = %error.get_token_kind(),
            line = error.get_span().line,
            column = error.get_span().column_start,
            "{}",
            error.message()
        );
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Error> {
        self.errors.iter()
    }

    /// Flattens every diagnostic into a sink record.
    ///
    /// # Returns
    ///
    /// One [`DiagnosticRecord`] per reported error, in report order.
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.errors.iter().map(Error::record).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a Reporter {
    type Item = &'a Error;
    type IntoIter = Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
