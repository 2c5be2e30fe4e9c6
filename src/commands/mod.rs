//! Commands - Map library operations onto the unified result model

pub mod args;
pub mod extract;
pub mod find;
pub mod quick_add;

/// Message carried by `MalformedSort` when an argument line is rejected
pub fn sort_usage_message(command: &str) -> String {
    format!(
        "{}: KEYWORD [MORE_KEYWORDS]... [SORT_ARGUMENT]...\nSort arguments: {}",
        command,
        crate::parse::catalog::usage_string()
    )
}
