//! Sort catalog - The fixed set of recognized sort keywords
//!
//! Built once on first use and never mutated. The presentation order is every
//! default keyword, then every descending keyword, then every ascending one.

use once_cell::sync::Lazy;

use super::sort_argument::{SortArgument, SortDirection, SortField};

const DIRECTION_ORDER: [SortDirection; 3] = [
    SortDirection::Default,
    SortDirection::Descending,
    SortDirection::Ascending,
];

static CATALOG: Lazy<Vec<SortArgument>> = Lazy::new(|| {
    DIRECTION_ORDER
        .iter()
        .flat_map(|&direction| {
            SortField::ALL
                .iter()
                .map(move |&field| SortArgument::new(field, direction))
        })
        .collect()
});

static USAGE: Lazy<String> = Lazy::new(|| {
    CATALOG
        .iter()
        .map(|arg| format!("[{}]", arg.literal()))
        .collect::<Vec<_>>()
        .join(" ")
});

/// Every recognized sort argument, in presentation order
pub fn all() -> &'static [SortArgument] {
    &CATALOG
}

/// Whether `candidate` names a catalog entry (field and direction only)
pub fn contains(candidate: &SortArgument) -> bool {
    CATALOG.iter().any(|arg| arg == candidate)
}

/// Help text listing every keyword, e.g. `[n/] [p/] ... [a/asc]`
pub fn usage_string() -> &'static str {
    &USAGE
}
