//! Error and diagnostic system for the erdraw parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the JSON source
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Example
//!
//! ```
//! # use erdraw_parser::error::{Diagnostic, ErrorCode};
//! # use erdraw_parser::Span;
//!
//! let diag = Diagnostic::error("entity `User` is defined multiple times")
//!     .with_code(ErrorCode::E201)
//!     .with_label(Span::new(40..60), "duplicate definition")
//!     .with_help("rename one of the entities");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
