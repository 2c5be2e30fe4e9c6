//! Error types for argument interpretation

use std::fmt;
use thiserror::Error;

/// The kind of token an extractor was asked to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Int,
    Phone,
    Email,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Int => "integer",
            TokenKind::Phone => "phone",
            TokenKind::Email => "email",
        };
        write!(f, "{}", name)
    }
}

/// Errors raised while interpreting argument lines and field values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No {kind} found")]
    NotFound { kind: TokenKind },

    #[error("Invalid command format! \n{message}")]
    MalformedSort { message: String },

    #[error("{message}")]
    InvalidValue { field: &'static str, message: String },

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,
}

impl ParseError {
    /// Create a not found error
    pub fn not_found(kind: TokenKind) -> Self {
        ParseError::NotFound { kind }
    }

    /// Create a malformed sort error carrying the caller's message verbatim
    pub fn malformed_sort(message: &str) -> Self {
        ParseError::MalformedSort {
            message: message.to_string(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: &'static str, message: &str) -> Self {
        ParseError::InvalidValue {
            field,
            message: message.to_string(),
        }
    }

    /// Stable machine-readable code used in rendered error items
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::NotFound { .. } => "NOT_FOUND",
            ParseError::MalformedSort { .. } => "MALFORMED_SORT",
            ParseError::InvalidValue { .. } => "INVALID_VALUE",
            ParseError::InvalidIndex => "INVALID_INDEX",
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
