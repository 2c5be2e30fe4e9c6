//! rolodex-args - Argument-line interpretation for a contact book
//!
//! rolodex-args provides:
//! - Extraction of integer, phone and email tokens from free text
//! - A fixed catalog of sort arguments (field + direction)
//! - Classification of argument lines into keywords and sort arguments
//! - Record ordering by a selected field, or by the natural order
//! - Validated field value types shared by parsing and extraction

pub mod cli;
pub mod commands;
pub mod core;
pub mod fields;
pub mod parse;
pub mod record;

pub use crate::core::error::{ParseError, ParseResult, TokenKind};
pub use crate::parse::classify::{classify, classify_line, ParsedArgumentLine};
pub use crate::parse::extract::ExtractionResult;
pub use crate::parse::sort_argument::{SortArgument, SortDirection, SortField};
pub use crate::record::compare::{compare_by_sort_argument, compare_default};
pub use crate::record::person::Person;
pub use crate::record::Record;
