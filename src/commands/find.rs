//! Find command - keyword search over a JSON Lines record file

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use super::sort_usage_message;
use crate::core::model::{ItemError, ResultItem, ResultSet};
use crate::parse::classify::classify;
use crate::record::person::Person;
use crate::record::search::find;

/// Records read from a data file, with the lines that failed validation
#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub people: Vec<Person>,
    pub rejected: Vec<ItemError>,
}

/// Load people from a JSON Lines file; blank lines are skipped
pub fn load_records(path: &Path) -> Result<LoadedRecords> {
    let file = File::open(path).with_context(|| format!("Failed to open data file: {:?}", path))?;
    let reader = BufReader::new(file);

    let mut loaded = LoadedRecords::default();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read data file: {:?}", path))?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Person>(&line) {
            Ok(person) => loaded.people.push(person),
            Err(err) => {
                warn!(line = line_num + 1, %err, "rejected record");
                loaded.rejected.push(ItemError::new(
                    "INVALID_VALUE",
                    format!("line {}: {}", line_num + 1, err),
                ));
            }
        }
    }

    debug!(
        loaded = loaded.people.len(),
        rejected = loaded.rejected.len(),
        "read data file"
    );
    Ok(loaded)
}

/// Search `path` with an argument line of keywords and sort arguments
pub fn find_records(path: &Path, tokens: &[String]) -> Result<ResultSet> {
    let mut result_set = ResultSet::new();

    let line = match classify(tokens, &sort_usage_message("find")) {
        Ok(line) => line,
        Err(err) => {
            result_set.push(ResultItem::from(&err));
            return Ok(result_set);
        }
    };

    let loaded = load_records(path)?;
    result_set.extend(loaded.rejected.into_iter().map(ResultItem::error));

    for person in find(&loaded.people, &line) {
        result_set.push(ResultItem::record(
            person.as_text(),
            serde_json::to_value(person)?,
        ));
    }

    Ok(result_set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Kind;
    use std::fs;
    use tempfile::tempdir;

    const DATA: &str = r#"{"name":"Carl Kurz","phone":"95352563","email":"heinz@example.com","address":"wall street"}
{"name":"Alice Pauline","phone":"85355255","email":"alice@example.com","address":"Jurong","tags":["friends"]}

{"name":"Benson Meier","phone":"98765432","email":"johnd@example.com","address":"Clementi","tags":["friends"]}
"#;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_records_skips_blank_lines() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("people.jsonl");
        fs::write(&path, DATA).unwrap();

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded.people.len(), 3);
        assert!(loaded.rejected.is_empty());
    }

    #[test]
    fn test_load_records_rejects_invalid_lines() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("people.jsonl");
        fs::write(
            &path,
            "{\"name\":\"Bob\",\"phone\":\"1\",\"email\":\"b@b\",\"address\":\"x\"}\n",
        )
        .unwrap();

        let loaded = load_records(&path).unwrap();
        assert!(loaded.people.is_empty());
        assert!(loaded.rejected[0].message.starts_with("line 1:"));
    }

    #[test]
    fn test_load_records_missing_file() {
        let temp = tempdir().unwrap();
        assert!(load_records(&temp.path().join("missing.jsonl")).is_err());
    }

    #[test]
    fn test_find_records_sorted() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("people.jsonl");
        fs::write(&path, DATA).unwrap();

        let result = find_records(&path, &tokens(&["friends", "n/desc"])).unwrap();
        let names: Vec<_> = result
            .items
            .iter()
            .filter(|i| i.kind == Kind::Record)
            .map(|i| i.data.as_ref().unwrap()["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Benson Meier", "Alice Pauline"]);
    }

    #[test]
    fn test_find_records_malformed_line_skips_loading() {
        let temp = tempdir().unwrap();
        let result = find_records(&temp.path().join("missing.jsonl"), &tokens(&["p/", "bob"]))
            .unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].errors[0].code, "MALFORMED_SORT");
    }
}
