//! Record module - Contact records and the operations that order and search them

pub mod compare;
pub mod person;
pub mod quick_add;
pub mod search;

use crate::parse::sort_argument::SortField;

/// What ordering and searching need from a record.
///
/// Field values are validated and never missing.
pub trait Record {
    /// Text value of a sortable field
    fn field_value(&self, field: SortField) -> &str;

    /// Whether the record matches any of the free-text keywords
    fn matches_any_keyword(&self, keywords: &[String]) -> bool;
}
