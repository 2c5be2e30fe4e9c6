//! Person names

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{anchored, validate};
use crate::core::error::{ParseError, ParseResult};

pub const MESSAGE_NAME_CONSTRAINTS: &str =
    "Person names should only contain alphanumeric characters and spaces, and it should not be blank";

/// The first character must not be a space, so "" and " " are rejected
pub const NAME_VALIDATION_PATTERN: &str = r"[\p{Alphabetic}\p{N}][\p{Alphabetic}\p{N} ]*";

static NAME_FULL_RE: Lazy<Regex> = Lazy::new(|| anchored(NAME_VALIDATION_PATTERN));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> ParseResult<Self> {
        validate(raw, &NAME_FULL_RE, "name", MESSAGE_NAME_CONSTRAINTS).map(Name)
    }

    pub fn is_valid(raw: &str) -> bool {
        NAME_FULL_RE.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Individual words of the name
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = ParseError;

    fn try_from(value: String) -> ParseResult<Self> {
        Name::new(&value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(Name::is_valid("peter jack"));
        assert!(Name::is_valid("12345"));
        assert!(Name::is_valid("Capital Tan"));
        assert!(Name::is_valid("David Roger Jackson Ray Jr 2nd"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" "));
        assert!(!Name::is_valid("^"));
        assert!(!Name::is_valid("peter*"));
    }

    #[test]
    fn test_words() {
        let name = Name::new("Alice  Pauline").unwrap();
        assert_eq!(name.words().collect::<Vec<_>>(), vec!["Alice", "Pauline"]);
    }
}
