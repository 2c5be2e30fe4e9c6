//! Value parsers for command arguments

use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::error::{ParseError, ParseResult};
use crate::fields::{Address, Email, Name, Phone, Tag};

/// A position in a displayed list, stored zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(index: usize) -> Self {
        Index(index)
    }

    /// `None` for 0, which has no one-based position
    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Index)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

/// Parse a one-based index, ignoring surrounding whitespace
pub fn parse_index(one_based: &str) -> ParseResult<Index> {
    let trimmed = one_based.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

fn parse_optional<T>(
    raw: Option<&str>,
    ctor: impl FnOnce(&str) -> ParseResult<T>,
) -> ParseResult<Option<T>> {
    raw.map(ctor).transpose()
}

pub fn parse_name(raw: Option<&str>) -> ParseResult<Option<Name>> {
    parse_optional(raw, Name::new)
}

pub fn parse_phone(raw: Option<&str>) -> ParseResult<Option<Phone>> {
    parse_optional(raw, Phone::new)
}

pub fn parse_email(raw: Option<&str>) -> ParseResult<Option<Email>> {
    parse_optional(raw, Email::new)
}

pub fn parse_address(raw: Option<&str>) -> ParseResult<Option<Address>> {
    parse_optional(raw, Address::new)
}

/// Parse tag names into a set; the first invalid name fails the whole set
pub fn parse_tags<I, S>(tags: I) -> ParseResult<BTreeSet<Tag>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter().map(|t| Tag::new(t.as_ref())).collect()
}
