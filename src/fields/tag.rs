//! Tags

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{anchored, validate};
use crate::core::error::{ParseError, ParseResult};

pub const MESSAGE_TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";

pub const TAG_VALIDATION_PATTERN: &str = r"[\p{Alphabetic}\p{N}]+";

static TAG_FULL_RE: Lazy<Regex> = Lazy::new(|| anchored(TAG_VALIDATION_PATTERN));

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> ParseResult<Self> {
        validate(raw, &TAG_FULL_RE, "tag", MESSAGE_TAG_CONSTRAINTS).map(Tag)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tags render bracketed, e.g. `[friends]`
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = ParseError;

    fn try_from(value: String) -> ParseResult<Self> {
        Tag::new(&value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}
