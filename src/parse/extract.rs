//! Token extraction - Pull typed tokens out of unstructured text
//!
//! Each extractor finds the leftmost match of its pattern. Removal cuts that
//! match out and rejoins the trimmed halves with exactly one space, so the
//! residual never keeps the original whitespace at the cut:
//!
//! `"call 42   times"` with the integer removed becomes `"call times"`.

use once_cell::sync::Lazy;
use regex::{Match, Regex};
use serde::Serialize;
use tracing::debug;

use crate::core::error::{ParseError, ParseResult, TokenKind};
use crate::fields::email::EMAIL_VALIDATION_RE;
use crate::fields::phone::PHONE_VALIDATION_RE;

/// Optionally signed decimal integer
pub static INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+").expect("Invalid INT_RE regex"));

/// A matched token together with the text left after removing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub matched: String,
    pub residual: String,
}

impl TokenKind {
    /// The regex this kind of token is scanned with
    pub fn pattern(&self) -> &'static Regex {
        match self {
            TokenKind::Int => &INT_RE,
            TokenKind::Phone => &PHONE_VALIDATION_RE,
            TokenKind::Email => &EMAIL_VALIDATION_RE,
        }
    }
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" | "integer" => Ok(TokenKind::Int),
            "phone" => Ok(TokenKind::Phone),
            "email" => Ok(TokenKind::Email),
            _ => Err(format!("Unknown token kind: {}", s)),
        }
    }
}

fn find_first(kind: TokenKind, text: &str) -> ParseResult<Match<'_>> {
    kind.pattern()
        .find(text)
        .ok_or_else(|| ParseError::not_found(kind))
}

/// Join the text around `m`, collapsing the cut to a single space
fn excise(text: &str, m: &Match<'_>) -> String {
    let before = text[..m.start()].trim();
    let after = text[m.end()..].trim();
    match (before.is_empty(), after.is_empty()) {
        (true, _) => after.to_string(),
        (_, true) => before.to_string(),
        _ => format!("{} {}", before, after),
    }
}

/// Find the first token of `kind` and the residual text without it
pub fn extract_first(kind: TokenKind, text: &str) -> ParseResult<ExtractionResult> {
    if kind == TokenKind::Int {
        return extract_first_int(text);
    }
    let m = find_first(kind, text)?;
    let result = ExtractionResult {
        matched: m.as_str().to_string(),
        residual: excise(text, &m),
    };
    debug!(%kind, matched = %result.matched, "extracted token");
    Ok(result)
}

/// Return the first token of `kind` as text
pub fn first_token(kind: TokenKind, text: &str) -> ParseResult<String> {
    let m = match kind {
        TokenKind::Int => find_first_int(text)?.0,
        _ => find_first(kind, text)?,
    };
    Ok(m.as_str().to_string())
}

/// Return `text` with the first token of `kind` removed
pub fn remove_first(kind: TokenKind, text: &str) -> ParseResult<String> {
    extract_first(kind, text).map(|r| r.residual)
}

/// First integer match that also fits `i64`; a digit run too large for it
/// is reported as not found, like an absent integer
fn find_first_int(text: &str) -> ParseResult<(Match<'_>, i64)> {
    let m = find_first(TokenKind::Int, text)?;
    let value: i64 = m
        .as_str()
        .parse()
        .map_err(|_| ParseError::not_found(TokenKind::Int))?;
    Ok((m, value))
}

pub fn try_extract_int(text: &str) -> bool {
    find_first_int(text).is_ok()
}

/// Returns the first integer found in `text`.
pub fn first_int(text: &str) -> ParseResult<i64> {
    find_first_int(text).map(|(_, value)| value)
}

pub fn remove_first_int(text: &str) -> ParseResult<String> {
    extract_first_int(text).map(|r| r.residual)
}

/// Fails exactly when `first_int` fails
pub fn extract_first_int(text: &str) -> ParseResult<ExtractionResult> {
    let (m, value) = find_first_int(text)?;
    debug!(value, "extracted integer");
    Ok(ExtractionResult {
        matched: m.as_str().to_string(),
        residual: excise(text, &m),
    })
}

pub fn try_extract_phone(text: &str) -> bool {
    PHONE_VALIDATION_RE.is_match(text)
}

pub fn first_phone(text: &str) -> ParseResult<String> {
    first_token(TokenKind::Phone, text)
}

pub fn remove_first_phone(text: &str) -> ParseResult<String> {
    remove_first(TokenKind::Phone, text)
}

pub fn extract_first_phone(text: &str) -> ParseResult<ExtractionResult> {
    extract_first(TokenKind::Phone, text)
}

pub fn try_extract_email(text: &str) -> bool {
    EMAIL_VALIDATION_RE.is_match(text)
}

pub fn first_email(text: &str) -> ParseResult<String> {
    first_token(TokenKind::Email, text)
}

pub fn remove_first_email(text: &str) -> ParseResult<String> {
    remove_first(TokenKind::Email, text)
}

pub fn extract_first_email(text: &str) -> ParseResult<ExtractionResult> {
    extract_first(TokenKind::Email, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Email, Phone};

    #[test]
    fn test_no_integer() {
        for s in ["", "   ", "no digits here", "n/asc p/desc"] {
            assert!(!try_extract_int(s));
            assert_eq!(
                first_int(s).unwrap_err(),
                ParseError::not_found(TokenKind::Int)
            );
            assert!(remove_first_int(s).is_err());
        }
    }

    #[test]
    fn test_first_int_signed_and_leftmost() {
        assert_eq!(first_int("delete 3 then 7").unwrap(), 3);
        assert_eq!(first_int("move -12 up").unwrap(), -12);
        assert_eq!(first_int("abc123def").unwrap(), 123);
    }

    #[test]
    fn test_first_int_overflow_is_not_found() {
        let text = "x 99999999999999999999999 y";
        let not_found = ParseError::not_found(TokenKind::Int);
        assert!(!try_extract_int(text));
        assert_eq!(first_int(text).unwrap_err(), not_found);
        assert_eq!(remove_first_int(text).unwrap_err(), not_found);
        assert_eq!(extract_first_int(text).unwrap_err(), not_found);
    }

    #[test]
    fn test_try_extract_int_agrees_with_removal() {
        let texts = [
            "a 12 b",
            "none",
            "-7",
            "x 99999999999999999999999 y",
            "9223372036854775807",
        ];
        for text in texts {
            let found = try_extract_int(text);
            assert_eq!(found, remove_first_int(text).is_ok(), "{}", text);
            assert_eq!(found, extract_first_int(text).is_ok(), "{}", text);
            assert_eq!(found, extract_first(TokenKind::Int, text).is_ok(), "{}", text);
            assert_eq!(found, first_token(TokenKind::Int, text).is_ok(), "{}", text);
        }
    }

    #[test]
    fn test_remove_int_between_words() {
        assert_eq!(remove_first_int("delete 3 alice").unwrap(), "delete alice");
        assert_eq!(remove_first_int("  edit   42\t\tbob  ").unwrap(), "edit bob");
    }

    #[test]
    fn test_remove_int_joins_without_whitespace() {
        // no whitespace around the token still yields one separator
        assert_eq!(remove_first_int("abc123def").unwrap(), "abc def");
    }

    #[test]
    fn test_remove_int_at_edges() {
        assert_eq!(remove_first_int("5 remaining").unwrap(), "remaining");
        assert_eq!(remove_first_int("remaining 5").unwrap(), "remaining");
        assert_eq!(remove_first_int("5").unwrap(), "");
    }

    #[test]
    fn test_remove_only_leftmost() {
        assert_eq!(remove_first_int("1 and 1 again").unwrap(), "and 1 again");
        let residual = remove_first_int("a 12 b 34").unwrap();
        assert_eq!(residual, "a b 34");
        assert_eq!(first_int(&residual).unwrap(), 34);
    }

    #[test]
    fn test_phone_extraction() {
        let text = "John Doe 98765432 john@example.com";
        assert!(try_extract_phone(text));
        assert_eq!(first_phone(text).unwrap(), "98765432");
        assert_eq!(
            remove_first_phone(text).unwrap(),
            "John Doe john@example.com"
        );
        assert!(!try_extract_phone("call me at 12"));
        assert!(first_phone("nothing").is_err());
    }

    #[test]
    fn test_email_extraction() {
        let text = "John Doe 98765432 john@example.com Clementi";
        assert!(try_extract_email(text));
        let result = extract_first_email(text).unwrap();
        assert_eq!(result.matched, "john@example.com");
        assert_eq!(result.residual, "John Doe 98765432 Clementi");
        assert!(!try_extract_email("no at sign"));
        assert_eq!(
            remove_first_email("nothing").unwrap_err(),
            ParseError::not_found(TokenKind::Email)
        );
    }

    #[test]
    fn test_extracted_tokens_are_valid_fields() {
        let text = "Jane 5551234 jane.doe@mail.example";
        assert!(Phone::new(&first_phone(text).unwrap()).is_ok());
        assert!(Email::new(&first_email(text).unwrap()).is_ok());
    }

    #[test]
    fn test_extraction_does_not_touch_input() {
        let text = String::from("a 1 b");
        let _ = remove_first_int(&text).unwrap();
        assert_eq!(text, "a 1 b");
    }

    #[test]
    fn test_token_kind_from_str() {
        assert_eq!("INT".parse::<TokenKind>().unwrap(), TokenKind::Int);
        assert_eq!("email".parse::<TokenKind>().unwrap(), TokenKind::Email);
        assert!("date".parse::<TokenKind>().is_err());
    }
}
