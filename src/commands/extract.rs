//! Token extraction command

use serde_json::json;

use crate::core::error::TokenKind;
use crate::core::model::{ResultItem, ResultSet};
use crate::parse::extract::extract_first;

/// Extract the first token of `kind` from `text`
pub fn extract_token(kind: TokenKind, text: &str) -> ResultSet {
    let mut result_set = ResultSet::new();

    let item = match extract_first(kind, text) {
        Ok(result) => ResultItem::extract(
            result.residual.clone(),
            json!({
                "kind": kind.to_string(),
                "matched": result.matched,
                "residual": result.residual,
            }),
        ),
        Err(err) => ResultItem::from(&err),
    };

    result_set.push(item);
    result_set
}
