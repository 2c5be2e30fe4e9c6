//! Keyword search with ordering

use tracing::debug;

use super::compare::compare_with;
use super::Record;
use crate::parse::classify::ParsedArgumentLine;
use crate::parse::sort_argument::SortArgument;

/// Pick the sort argument to apply: the last one given wins
pub fn resolve_sort(sort_arguments: &[SortArgument]) -> Option<&SortArgument> {
    sort_arguments.last()
}

/// Records matching any keyword (all records when there are none), ordered
/// by the resolved sort argument or the natural order. Ties keep input order.
pub fn find<'a, R: Record>(records: &'a [R], line: &ParsedArgumentLine) -> Vec<&'a R> {
    let mut found: Vec<&R> = records
        .iter()
        .filter(|r| line.keywords.is_empty() || r.matches_any_keyword(&line.keywords))
        .collect();

    let sort = resolve_sort(&line.sort_arguments);
    if line.sort_arguments.len() > 1 {
        debug!(
            count = line.sort_arguments.len(),
            applied = sort.map(|s| s.literal()),
            "multiple sort arguments, using the last"
        );
    }

    found.sort_by(|a, b| compare_with(*a, *b, sort));
    found
}
