//! Error types for erdraw operations.
//!
//! This module provides the main error type [`ErdrawError`] which wraps
//! the error conditions that can occur while turning a document into a
//! diagram. Relationship routing never fails; dropped relationships are
//! reported on the layout instead.

use std::io;

use thiserror::Error;

use erdraw_parser::error::ParseError;

/// The main error type for erdraw operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the structured
/// diagnostics so callers can render labelled snippets.
#[derive(Debug, Error)]
pub enum ErdrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ErdrawError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl ErdrawError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
