//! Author domain model.
//!
//! # Responsibility
//! - Define the canonical author record.
//! - Gate every field assignment behind its validator.
//!
//! # Invariants
//! - `id` is generated once and never reused for another author.
//! - `name` is non-blank and unique across the record set.
//! - `phone_number` is exactly ten decimal digits.
//! - A rejected assignment leaves the previous value in place.

use crate::validation::{validate_name, validate_phone, AuthorNameLookup, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an author record.
pub type AuthorId = Uuid;

/// Canonical author record.
///
/// Fields are private so that values only enter through validating
/// constructors and setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    phone_number: String,
}

/// Input payload for registering an author.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorDraft {
    pub name: String,
    pub phone_number: String,
}

impl AuthorDraft {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }
}

impl Author {
    /// Creates an author with a generated id after validating every field.
    ///
    /// # Errors
    /// - `MissingName` / `DuplicateName` from the name rule.
    /// - `InvalidPhone` from the phone rule.
    /// - Any lookup failure raised by `lookup`.
    pub fn new<L>(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        lookup: &L,
    ) -> Result<Self, L::Error>
    where
        L: AuthorNameLookup + ?Sized,
    {
        let name = validate_name(None, name, lookup)?;
        let phone_number = validate_phone(phone_number)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            phone_number,
        })
    }

    /// Rebuilds a record that was already validated when it was stored.
    pub(crate) fn from_storage(id: AuthorId, name: String, phone_number: String) -> Self {
        Self {
            id,
            name,
            phone_number,
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Replaces the name. Re-submitting the current name always succeeds.
    pub fn set_name<L>(&mut self, name: impl Into<String>, lookup: &L) -> Result<(), L::Error>
    where
        L: AuthorNameLookup + ?Sized,
    {
        self.name = validate_name(Some(self.id), name, lookup)?;
        Ok(())
    }

    pub fn set_phone_number(
        &mut self,
        phone_number: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.phone_number = validate_phone(phone_number)?;
        Ok(())
    }
}
