//! Error codes for the erdraw diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - JSON decoding errors
//! - `E2xx` - Validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Decoding Errors (E1xx)
    // =========================================================================
    /// Malformed JSON.
    ///
    /// The input is not syntactically valid JSON or ends unexpectedly.
    E100,

    /// Unexpected document structure.
    ///
    /// The JSON is valid but a required field is missing or has the wrong type.
    E101,

    // =========================================================================
    // Validation Errors (E2xx)
    // =========================================================================
    /// Empty name.
    ///
    /// An entity, actor or use case has an empty name or identifier.
    E200,

    /// Duplicate entity name.
    ///
    /// Two classes or tables share a name; relationships could not tell them apart.
    E201,

    /// Empty member name.
    ///
    /// An attribute, method or field has an empty name.
    E202,

    /// Duplicate identifier.
    ///
    /// Two actors or two use cases share an id.
    E203,

    /// Unrecognized document shape.
    ///
    /// The top-level JSON value matches no known diagram kind.
    E204,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed JSON",
            ErrorCode::E101 => "unexpected document structure",
            ErrorCode::E200 => "empty name",
            ErrorCode::E201 => "duplicate entity name",
            ErrorCode::E202 => "empty member name",
            ErrorCode::E203 => "duplicate identifier",
            ErrorCode::E204 => "unrecognized document shape",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E204.to_string(), "E204");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E101.description(), "unexpected document structure");
        assert_eq!(ErrorCode::E201.description(), "duplicate entity name");
    }
}
