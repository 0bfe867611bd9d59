//! Author field validators.
//!
//! # Invariants
//! - Name uniqueness is an exact, case-sensitive match.
//! - The record being updated never conflicts with itself.
//! - Uniqueness is read-then-write; concurrent writers rely on the storage
//!   UNIQUE index as backstop.

use super::ValidationError;
use crate::model::author::{Author, AuthorId};
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone number regex"));

/// Record-store capability used by the name-uniqueness rule.
///
/// Implementations look up authors by exact name and return at most one
/// matching id. `Error` lets storage failures propagate next to rule
/// failures without a second error channel.
pub trait AuthorNameLookup {
    type Error: From<ValidationError>;

    fn find_author_id_by_name(&self, name: &str) -> Result<Option<AuthorId>, Self::Error>;
}

/// In-memory record set, used by hosts that keep authors outside SQLite.
impl AuthorNameLookup for [Author] {
    type Error = ValidationError;

    fn find_author_id_by_name(&self, name: &str) -> Result<Option<AuthorId>, Self::Error> {
        Ok(self
            .iter()
            .find(|author| author.name() == name)
            .map(Author::id))
    }
}

/// Validates an author name, returning it unchanged on success.
///
/// `current` is the id of the record being updated, or `None` on create.
/// A stored match with that same id is not a conflict.
pub fn validate_name<L>(
    current: Option<AuthorId>,
    name: impl Into<String>,
    lookup: &L,
) -> Result<String, L::Error>
where
    L: AuthorNameLookup + ?Sized,
{
    let name = name.into();
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName.into());
    }

    match lookup.find_author_id_by_name(&name)? {
        Some(existing) if Some(existing) != current => Err(ValidationError::DuplicateName.into()),
        _ => Ok(name),
    }
}

/// Validates a phone number: exactly ten ASCII decimal digits.
pub fn validate_phone(phone: impl Into<String>) -> Result<String, ValidationError> {
    let phone = phone.into();
    if !PHONE_NUMBER_RE.is_match(&phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(phone)
}
