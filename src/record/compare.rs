//! Record ordering
//!
//! Text fields compare case-insensitively. A sort argument selects exactly one
//! field, with no tie-break; callers that need ties kept in order should use a
//! stable sort.

use std::cmp::Ordering;

use super::Record;
use crate::parse::sort_argument::{SortArgument, SortDirection, SortField};

/// Lexicographic comparison after lowercasing both sides
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn compare_field<R: Record + ?Sized>(a: &R, b: &R, field: SortField) -> Ordering {
    compare_ignore_case(a.field_value(field), b.field_value(field))
}

/// Natural order: name, then phone, then email, then address
pub fn compare_default<R: Record + ?Sized>(a: &R, b: &R) -> Ordering {
    SortField::ALL
        .iter()
        .map(|&field| compare_field(a, b, field))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Order by the single field named in `arg`; descending reverses the result
pub fn compare_by_sort_argument<R: Record + ?Sized>(
    a: &R,
    b: &R,
    arg: &SortArgument,
) -> Ordering {
    let ord = compare_field(a, b, arg.field());
    match arg.direction() {
        SortDirection::Default | SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Order by `arg` when present, otherwise by the natural order
pub fn compare_with<R: Record + ?Sized>(a: &R, b: &R, arg: Option<&SortArgument>) -> Ordering {
    match arg {
        Some(arg) => compare_by_sort_argument(a, b, arg),
        None => compare_default(a, b),
    }
}
