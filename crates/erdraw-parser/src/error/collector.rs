//! Collector for accumulating diagnostics during validation.
//!
//! The [`DiagnosticCollector`] lets validation report every problem in a
//! document instead of failing on the first one.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics during a processing phase.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// If it is an error, the collector is marked as having errors.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - If there are no errors, warnings are logged and `Ok(())` is returned.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }
        for diagnostic in &self.diagnostics {
            warn!(diagnostic:% = diagnostic; "Input warning");
        }
        Ok(())
    }
}
