//! Argument classification
//!
//! Splits an argument line into free-text keywords and sort arguments.
//! Keywords come first; once a sort keyword appears, every following token
//! must also be a sort keyword.

use serde::Serialize;
use tracing::debug;

use super::catalog;
use super::sort_argument::SortArgument;
use crate::core::error::{ParseError, ParseResult};

/// Keywords and sort arguments of one argument line, both in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedArgumentLine {
    pub keywords: Vec<String>,
    pub sort_arguments: Vec<SortArgument>,
}

impl ParsedArgumentLine {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.sort_arguments.is_empty()
    }
}

/// Classify already tokenized arguments.
///
/// `error_message` is returned verbatim inside `MalformedSort` when a keyword
/// follows a sort argument. Repeated or conflicting sort arguments are kept
/// as they are.
pub fn classify<S: AsRef<str>>(
    tokens: &[S],
    error_message: &str,
) -> ParseResult<ParsedArgumentLine> {
    let mut line = ParsedArgumentLine::default();

    for token in tokens {
        let token = token.as_ref();
        match SortArgument::parse(token).filter(catalog::contains) {
            Some(arg) => line.sort_arguments.push(arg),
            None if line.sort_arguments.is_empty() => line.keywords.push(token.to_string()),
            None => {
                debug!(token, "keyword after sort arguments");
                return Err(ParseError::malformed_sort(error_message));
            }
        }
    }

    debug!(
        keywords = line.keywords.len(),
        sort_arguments = line.sort_arguments.len(),
        "classified argument line"
    );
    Ok(line)
}

/// Split a raw argument string on whitespace and classify it
pub fn classify_line(raw: &str, error_message: &str) -> ParseResult<ParsedArgumentLine> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    classify(&tokens, error_message)
}
