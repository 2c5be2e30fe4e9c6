//! Quick-add command

use anyhow::Result;

use crate::core::model::{ResultItem, ResultSet};
use crate::record::quick_add::parse_quick_add;

/// Parse one free-text line into a person record
pub fn quick_add(text: &str) -> Result<ResultSet> {
    let mut result_set = ResultSet::new();

    let item = match parse_quick_add(text) {
        Ok(person) => ResultItem::record(person.as_text(), serde_json::to_value(&person)?),
        Err(err) => ResultItem::from(&err),
    };

    result_set.push(item);
    Ok(result_set)
}
