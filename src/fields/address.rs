//! Postal addresses

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{anchored, validate};
use crate::core::error::{ParseError, ParseResult};

pub const MESSAGE_ADDRESS_CONSTRAINTS: &str =
    "Person addresses can take any values, and it should not be blank";

pub const ADDRESS_VALIDATION_PATTERN: &str = r"[^\s].*";

static ADDRESS_FULL_RE: Lazy<Regex> = Lazy::new(|| anchored(ADDRESS_VALIDATION_PATTERN));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> ParseResult<Self> {
        validate(raw, &ADDRESS_FULL_RE, "address", MESSAGE_ADDRESS_CONSTRAINTS).map(Address)
    }

    pub fn is_valid(raw: &str) -> bool {
        ADDRESS_FULL_RE.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Address {
    type Error = ParseError;

    fn try_from(value: String) -> ParseResult<Self> {
        Address::new(&value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}
