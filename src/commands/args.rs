//! Argument classification and usage commands

use serde_json::json;

use super::sort_usage_message;
use crate::core::model::{ResultItem, ResultSet};
use crate::parse::catalog;
use crate::parse::classify::classify;
use crate::record::search::resolve_sort;

/// Classify the given argument tokens
pub fn classify_args(tokens: &[String]) -> ResultSet {
    let mut result_set = ResultSet::new();

    let item = match classify(tokens, &sort_usage_message("classify")) {
        Ok(line) => ResultItem::classify(json!({
            "keywords": line.keywords,
            "sort_arguments": line.sort_arguments,
            "applied_sort": resolve_sort(&line.sort_arguments),
        })),
        Err(err) => ResultItem::from(&err),
    };

    result_set.push(item);
    result_set
}

/// List every recognized sort keyword
pub fn usage() -> ResultSet {
    let mut result_set = ResultSet::new();
    result_set.push(
        ResultItem::usage(catalog::usage_string()).with_data(json!({
            "sort_arguments": catalog::all(),
        })),
    );
    result_set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Kind;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classify_args() {
        let result = classify_args(&tokens(&["alice", "n/asc", "p/desc"]));
        let item = &result.items[0];
        assert_eq!(item.kind, Kind::Classify);

        let data = item.data.as_ref().unwrap();
        assert_eq!(data["keywords"], json!(["alice"]));
        assert_eq!(data["sort_arguments"][0]["field"], "name");
        assert_eq!(data["sort_arguments"][0]["direction"], "ascending");
        assert_eq!(data["applied_sort"]["literal"], "p/desc");
    }

    #[test]
    fn test_classify_args_malformed() {
        let result = classify_args(&tokens(&["n/", "alice"]));
        assert!(result.has_errors());
        assert_eq!(result.items[0].errors[0].code, "MALFORMED_SORT");
        assert!(result.items[0].errors[0].message.contains("[a/asc]"));
    }

    #[test]
    fn test_usage() {
        let result = usage();
        assert_eq!(result.items[0].text.as_deref(), Some(catalog::usage_string()));
        assert_eq!(
            result.items[0].data.as_ref().unwrap()["sort_arguments"]
                .as_array()
                .unwrap()
                .len(),
            12
        );
    }
}
