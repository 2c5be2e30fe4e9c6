//! Field value types - Validated contact fields
//!
//! Each type wraps a trimmed string that matched its validation pattern.
//! The phone and email patterns are shared with the token extractors in
//! `crate::parse::extract`, so a token the extractor finds is always a token
//! the field accepts.

pub mod address;
pub mod email;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::Address;
pub use email::Email;
pub use name::Name;
pub use phone::Phone;
pub use tag::Tag;

use regex::Regex;

use crate::core::error::{ParseError, ParseResult};

/// Build the whole-value regex for a validation pattern
pub(crate) fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).expect("Invalid field validation regex")
}

/// Trim `raw` and check it against a whole-value regex
pub(crate) fn validate(
    raw: &str,
    re: &Regex,
    field: &'static str,
    constraints: &str,
) -> ParseResult<String> {
    let trimmed = raw.trim();
    if re.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ParseError::invalid_value(field, constraints))
    }
}
