//! Person records

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strsim::levenshtein;

use super::compare::compare_ignore_case;
use super::Record;
use crate::core::error::ParseResult;
use crate::fields::{Address, Email, Name, Phone, Tag};
use crate::parse::sort_argument::SortField;
use crate::parse::values::parse_tags;

/// Largest edit distance at which a keyword still counts as close to a name word
pub const NAME_CLOSENESS_DISTANCE: usize = 1;

/// A contact; every field has passed its own validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Validate raw field text and build a person
    pub fn from_parts(
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
        tags: &[&str],
    ) -> ParseResult<Self> {
        Ok(Self::new(
            Name::new(name)?,
            Phone::new(phone)?,
            Email::new(email)?,
            Address::new(address)?,
            parse_tags(tags)?,
        ))
    }

    /// A keyword equals a whole word of the name, ignoring case
    pub fn is_name_match_any_keyword(&self, keywords: &[String]) -> bool {
        keywords
            .iter()
            .any(|k| self.name.words().any(|w| compare_ignore_case(w, k).is_eq()))
    }

    /// A keyword is within a small edit distance of a name word, ignoring case
    pub fn is_name_close_to_any_keyword(&self, keywords: &[String]) -> bool {
        keywords.iter().any(|k| {
            let k = k.to_lowercase();
            self.name
                .words()
                .any(|w| levenshtein(&w.to_lowercase(), &k) <= NAME_CLOSENESS_DISTANCE)
        })
    }

    /// A keyword names one of the tags, ignoring case
    pub fn is_tag_set_joint_keyword_set(&self, keywords: &[String]) -> bool {
        keywords
            .iter()
            .any(|k| {
                self.tags
                    .iter()
                    .any(|t| compare_ignore_case(t.as_str(), k).is_eq())
            })
    }

    /// A keyword occurs in any field, or names a tag
    pub fn is_search_keywords_match_any_data(&self, keywords: &[String]) -> bool {
        let fields = [
            self.name.as_str().to_lowercase(),
            self.phone.as_str().to_lowercase(),
            self.email.as_str().to_lowercase(),
            self.address.as_str().to_lowercase(),
        ];
        keywords.iter().any(|k| {
            let k = k.to_lowercase();
            fields.iter().any(|f| f.contains(&k))
        }) || self.is_tag_set_joint_keyword_set(keywords)
    }

    /// Same name, phone, email and address; tags are not compared
    pub fn is_same_state_as(&self, other: &Person) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
    }

    /// One-line text form showing every detail
    pub fn as_text(&self) -> String {
        let tags: String = self.tags.iter().map(|t| t.to_string()).collect();
        format!(
            "{} Phone: {} Email: {} Address: {} Tags: {}",
            self.name, self.phone, self.email, self.address, tags
        )
    }
}

impl Record for Person {
    fn field_value(&self, field: SortField) -> &str {
        match field {
            SortField::Name => self.name.as_str(),
            SortField::Phone => self.phone.as_str(),
            SortField::Email => self.email.as_str(),
            SortField::Address => self.address.as_str(),
        }
    }

    fn matches_any_keyword(&self, keywords: &[String]) -> bool {
        self.is_search_keywords_match_any_data(keywords)
            || self.is_name_close_to_any_keyword(keywords)
    }
}
