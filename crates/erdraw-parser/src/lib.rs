//! # erdraw Parser
//!
//! Loads JSON diagram descriptions and validates them into the semantic
//! model consumed by the layout engine.
//!
//! ## Usage
//!
//! ```
//! # use erdraw_parser::{parse, error::ParseError};
//! # use erdraw_core::semantic::DiagramKind;
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"[
//!         {"name": "Person"},
//!         {"name": "Customer", "relationships": [{"type": "inheritance", "target": "Person"}]}
//!     ]"#;
//!
//!     let diagram = parse(source, None)?;
//!     assert_eq!(diagram.kind(), DiagramKind::Class);
//!     Ok(())
//! }
//! ```

pub mod error;

mod elaborate;
mod schema;
mod span;

pub use span::Span;

use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde_json::{Value, error::Category};

use erdraw_core::semantic::{Diagram, DiagramKind};

use error::{Diagnostic, ErrorCode, ParseError};

/// Parse a JSON document into a semantic diagram.
///
/// 1. **Detect** - Infer the diagram kind when `kind` is `None`
/// 2. **Decode** - Deserialize the document shape for that kind
/// 3. **Validate** - Check names and identifiers, collecting every problem
/// 4. **Elaborate** - Build the semantic model
///
/// # Arguments
///
/// * `source` - The JSON document
/// * `kind` - The diagram kind, or `None` to detect it from the document shape
///
/// # Errors
///
/// Returns `ParseError` containing one or more diagnostics when the JSON is
/// malformed, does not match the expected shape, or fails validation.
pub fn parse(source: &str, kind: Option<DiagramKind>) -> Result<Diagram, ParseError> {
    let kind = match kind {
        Some(kind) => kind,
        None => detect_kind(source)?,
    };
    debug!(kind:%; "Decoding diagram");

    let diagram = match kind {
        DiagramKind::Class => elaborate::class_diagram(decode(source)?)?,
        DiagramKind::Table => elaborate::table_diagram(decode(source)?)?,
        DiagramKind::UseCase => elaborate::use_case_diagram(decode(source)?)?,
    };

    trace!(diagram:?; "Parsed diagram");
    Ok(diagram)
}

/// Infer the diagram kind from the top-level JSON shape.
///
/// - an object is a use-case diagram
/// - an array whose first element has `title` or `fields` is a table diagram
/// - any other array (including an empty one) is a class diagram
///
/// # Errors
///
/// Returns `ParseError` if the source is not valid JSON or its top-level
/// value is neither an array nor an object.
pub fn detect_kind(source: &str) -> Result<DiagramKind, ParseError> {
    let value: Value = serde_json::from_str(source).map_err(|err| json_diagnostic(source, &err))?;

    let kind = match &value {
        Value::Object(_) => DiagramKind::UseCase,
        Value::Array(items) => match items.first() {
            Some(Value::Object(first))
                if first.contains_key("title") || first.contains_key("fields") =>
            {
                DiagramKind::Table
            }
            _ => DiagramKind::Class,
        },
        _ => {
            return Err(Diagnostic::error(
                "expected a JSON array of classes or tables, or a use-case object",
            )
            .with_code(ErrorCode::E204)
            .with_label(Span::new(0..source.len()), "unrecognized document")
            .into());
        }
    };

    debug!(kind:%; "Detected diagram kind");
    Ok(kind)
}

fn decode<T: DeserializeOwned>(source: &str) -> Result<T, ParseError> {
    serde_json::from_str(source).map_err(|err| json_diagnostic(source, &err).into())
}

fn json_diagnostic(source: &str, err: &serde_json::Error) -> Diagnostic {
    let code = match err.classify() {
        Category::Data => ErrorCode::E101,
        Category::Io | Category::Syntax | Category::Eof => ErrorCode::E100,
    };
    let span = Span::from_line_column(source, err.line(), err.column());

    Diagnostic::error(err.to_string())
        .with_code(code)
        .with_label(span, code.description())
}
