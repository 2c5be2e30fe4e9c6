//! Email addresses

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{anchored, validate};
use crate::core::error::{ParseError, ParseResult};

pub const MESSAGE_EMAIL_CONSTRAINTS: &str =
    "Person emails should be 2 alphanumeric/period strings separated by '@'";

/// local-part@domain pattern shared by validation and extraction
pub const EMAIL_VALIDATION_PATTERN: &str = r"[\w\.]+@[\w\.]+";

/// Unanchored email regex, used to find an email inside free text
pub static EMAIL_VALIDATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_VALIDATION_PATTERN).expect("Invalid EMAIL_VALIDATION_RE regex"));

static EMAIL_FULL_RE: Lazy<Regex> = Lazy::new(|| anchored(EMAIL_VALIDATION_PATTERN));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> ParseResult<Self> {
        validate(raw, &EMAIL_FULL_RE, "email", MESSAGE_EMAIL_CONSTRAINTS).map(Email)
    }

    pub fn is_valid(raw: &str) -> bool {
        EMAIL_FULL_RE.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ParseError;

    fn try_from(value: String) -> ParseResult<Self> {
        Email::new(&value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}
