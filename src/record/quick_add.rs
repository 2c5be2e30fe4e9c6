//! Quick-add parsing
//!
//! Reads a person from one line of free text such as
//! `John Doe 98765432 johnd@example.com, 311 Clementi Ave 2`.
//! The email is taken out first so digits inside it are never read as the
//! phone; what is left before the first comma is the name and what follows
//! it is the address.

use tracing::debug;

use super::person::Person;
use crate::core::error::ParseResult;
use crate::fields::{Address, Email, Name, Phone};
use crate::parse::extract::{extract_first_email, extract_first_phone};

pub fn parse_quick_add(text: &str) -> ParseResult<Person> {
    let email = extract_first_email(text)?;
    let phone = extract_first_phone(&email.residual)?;

    let (name, address) = match phone.residual.split_once(',') {
        Some((name, address)) => (name, address),
        None => (phone.residual.as_str(), ""),
    };
    debug!(name, address, "quick-add residual split");

    Ok(Person::new(
        Name::new(name)?,
        Phone::new(&phone.matched)?,
        Email::new(&email.matched)?,
        Address::new(address)?,
        Default::default(),
    ))
}
