//! Unified Result Model
//!
//! Every command maps its outcome to this model before rendering output.

use serde::{Deserialize, Serialize};

use crate::core::error::ParseError;

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Classify,
    Extract,
    Record,
    Usage,
    Error,
}

/// Error information for a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemError {
    pub code: String,
    pub message: String,
}

impl ItemError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&ParseError> for ItemError {
    fn from(err: &ParseError) -> Self {
        ItemError::new(err.code(), err.to_string())
    }
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Human-readable text (record line, residual text, usage)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Structured payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Errors (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ItemError>,
}

impl ResultItem {
    fn of_kind(kind: Kind) -> Self {
        Self {
            kind,
            text: None,
            data: None,
            errors: Vec::new(),
        }
    }

    /// Create a classification result
    pub fn classify(data: serde_json::Value) -> Self {
        Self::of_kind(Kind::Classify).with_data(data)
    }

    /// Create an extraction result; `text` holds the residual
    pub fn extract(residual: impl Into<String>, data: serde_json::Value) -> Self {
        Self::of_kind(Kind::Extract)
            .with_text(residual)
            .with_data(data)
    }

    /// Create a record result
    pub fn record(text: impl Into<String>, data: serde_json::Value) -> Self {
        Self::of_kind(Kind::Record).with_text(text).with_data(data)
    }

    /// Create a usage result
    pub fn usage(text: impl Into<String>) -> Self {
        Self::of_kind(Kind::Usage).with_text(text)
    }

    /// Create a new error result
    pub fn error(error: ItemError) -> Self {
        Self::of_kind(Kind::Error).with_error(error)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Add an error
    pub fn with_error(mut self, error: ItemError) -> Self {
        self.errors.push(error);
        self
    }
}

impl From<&ParseError> for ResultItem {
    fn from(err: &ParseError) -> Self {
        ResultItem::error(err.into())
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    /// Whether any item reports an error
    pub fn has_errors(&self) -> bool {
        self.items
            .iter()
            .any(|i| i.kind == Kind::Error || !i.errors.is_empty())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
