//! Phone numbers

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{anchored, validate};
use crate::core::error::{ParseError, ParseResult};

pub const MESSAGE_PHONE_CONSTRAINTS: &str =
    "Phone numbers can only contain numbers, and should be at least 3 digits long";

/// Dialable-number pattern shared by validation and extraction
pub const PHONE_VALIDATION_PATTERN: &str = r"\d{3,}";

/// Unanchored phone regex, used to find a phone inside free text
pub static PHONE_VALIDATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_VALIDATION_PATTERN).expect("Invalid PHONE_VALIDATION_RE regex"));

static PHONE_FULL_RE: Lazy<Regex> = Lazy::new(|| anchored(PHONE_VALIDATION_PATTERN));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> ParseResult<Self> {
        validate(raw, &PHONE_FULL_RE, "phone", MESSAGE_PHONE_CONSTRAINTS).map(Phone)
    }

    pub fn is_valid(raw: &str) -> bool {
        PHONE_FULL_RE.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = ParseError;

    fn try_from(value: String) -> ParseResult<Self> {
        Phone::new(&value)
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}
