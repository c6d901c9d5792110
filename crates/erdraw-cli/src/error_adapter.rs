//! Error adapter for converting ErdrawError to miette diagnostics.
//!
//! Parse errors carry one or more structured diagnostics with spans into the
//! JSON input; each one is rendered as its own report. Every other error is
//! rendered as a single report without source snippets.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use erdraw::ErdrawError;
use erdraw_parser::error::Diagnostic;

/// Adapter for a single parser diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        if self.diag.severity().is_error() {
            Some(miette::Severity::Error)
        } else {
            Some(miette::Severity::Warning)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`ErdrawError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a ErdrawError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ErdrawError::Io(_) => "erdraw::io",
            ErdrawError::Parse { .. } => return None,
            ErdrawError::Config(_) => "erdraw::config",
            ErdrawError::Export(_) => "erdraw::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a parser [`Span`](erdraw_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: erdraw_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert an [`ErdrawError`] into a list of reportable errors.
///
/// A parse error yields one [`Reportable`] per diagnostic; any other error
/// yields a single one.
pub fn to_reportables(err: &ErdrawError) -> Vec<Reportable<'_>> {
    match err {
        ErdrawError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use erdraw_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::error("entity at `$[1]` has an empty name")
                .with_code(ErrorCode::E200)
                .with_label(Span::new(0..5), "here"),
            Diagnostic::error("entity `A` at `$[2]` is already defined at `$[0]`")
                .with_code(ErrorCode::E201)
                .with_help("entity names must be unique"),
        ];
        let err = ErdrawError::new_parse_error(ParseError::from(diags), "[{\"name\": \"A\"}]");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 2);
        assert_eq!(
            reportables[0].to_string(),
            "entity at `$[1]` has an empty name"
        );
        assert_eq!(reportables[1].code().unwrap().to_string(), "E201");
        assert!(reportables[1].labels().is_none());
    }

    #[test]
    fn test_labels_keep_primary_flag() {
        let diag = Diagnostic::error("malformed JSON")
            .with_label(Span::new(0..3), "primary")
            .with_secondary_label(Span::new(5..8), "secondary");
        let adapter = DiagnosticAdapter::new(&diag, "[1, 2, 3]");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
        assert_eq!(labels[1].offset(), 5);
    }

    #[test]
    fn test_non_parse_error() {
        let err = ErdrawError::Config("`style.class_palette` must contain at least one color".into());

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.code().unwrap().to_string(), "erdraw::config");
                assert!(e.to_string().starts_with("Configuration error:"));
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }
}
