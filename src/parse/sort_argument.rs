//! Sort arguments - One recognized sort keyword
//!
//! A keyword is a field prefix followed by an optional direction:
//! `n/` `p/` `e/` `a/` for name, phone, email and address, and `asc`/`desc`
//! after the slash. `n/` alone keeps the default direction.

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The record field a sort argument orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Phone,
    Email,
    Address,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::Phone,
        SortField::Email,
        SortField::Address,
    ];

    /// Keyword prefix for this field, e.g. `n/`
    pub fn prefix(&self) -> &'static str {
        match self {
            SortField::Name => "n/",
            SortField::Phone => "p/",
            SortField::Email => "e/",
            SortField::Address => "a/",
        }
    }
}

/// Direction applied to the field comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Default,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn suffix(&self) -> &'static str {
        match self {
            SortDirection::Default => "",
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// A parsed sort keyword.
///
/// Equality and hashing look only at the field and direction, so `N/ASC` and
/// `n/asc` are the same argument. The literal is kept for display.
#[derive(Debug, Clone)]
pub struct SortArgument {
    field: SortField,
    direction: SortDirection,
    literal: String,
}

impl SortArgument {
    /// Build the canonical argument for a field and direction
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field,
            direction,
            literal: format!("{}{}", field.prefix(), direction.suffix()),
        }
    }

    /// Parse a keyword, returning `None` when it is not a sort keyword
    pub fn parse(keyword: &str) -> Option<Self> {
        let trimmed = keyword.trim();
        let lower = trimmed.to_lowercase();

        let field = SortField::ALL
            .into_iter()
            .find(|f| lower.starts_with(f.prefix()))?;

        let direction = match &lower[field.prefix().len()..] {
            "" => SortDirection::Default,
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => return None,
        };

        Some(Self {
            field,
            direction,
            literal: trimmed.to_string(),
        })
    }

    pub fn field(&self) -> SortField {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The exact text this argument was parsed from
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl PartialEq for SortArgument {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.direction == other.direction
    }
}

impl Eq for SortArgument {}

impl Hash for SortArgument {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.direction.hash(state);
    }
}

impl fmt::Display for SortArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl FromStr for SortArgument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortArgument::parse(s).ok_or_else(|| format!("Unknown sort argument: {}", s))
    }
}

/// Serialized as `{"field": .., "direction": .., "literal": ..}`
impl Serialize for SortArgument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SortArgument", 3)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("direction", &self.direction)?;
        state.serialize_field("literal", &self.literal)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_direction() {
        let arg = SortArgument::parse("n/").unwrap();
        assert_eq!(arg.field(), SortField::Name);
        assert_eq!(arg.direction(), SortDirection::Default);
        assert_eq!(arg.literal(), "n/");
    }

    #[test]
    fn test_parse_directions() {
        let asc = SortArgument::parse("p/asc").unwrap();
        assert_eq!(asc.field(), SortField::Phone);
        assert_eq!(asc.direction(), SortDirection::Ascending);

        let desc = SortArgument::parse("a/desc").unwrap();
        assert_eq!(desc.field(), SortField::Address);
        assert_eq!(desc.direction(), SortDirection::Descending);
    }

    #[test]
    fn test_equality_ignores_literal_spelling() {
        let upper = SortArgument::parse("E/DESC").unwrap();
        let lower = SortArgument::parse("e/desc").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.literal(), "E/DESC");
        assert_eq!(lower, SortArgument::new(SortField::Email, SortDirection::Descending));
    }

    #[test]
    fn test_rejects_non_keywords() {
        for s in ["alice", "n", "n/ascending", "x/", "/asc", "", "n/ asc", "nn/"] {
            assert!(SortArgument::parse(s).is_none(), "{} should be rejected", s);
        }
        assert!("bob".parse::<SortArgument>().is_err());
    }

    #[test]
    fn test_display_uses_literal() {
        assert_eq!(SortArgument::parse("N/Asc").unwrap().to_string(), "N/Asc");
        assert_eq!(
            SortArgument::new(SortField::Phone, SortDirection::Default).to_string(),
            "p/"
        );
    }
}
