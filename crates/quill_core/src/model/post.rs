//! Post domain model.
//!
//! # Responsibility
//! - Define the canonical post record and its closed category set.
//! - Provide validate-before-commit constructors, setters and patching.
//!
//! # Invariants
//! - `title` is non-blank and free of configured clickbait phrases.
//! - `content` meets the minimum length, `summary` stays under the maximum.
//! - `category` is always one of `Category::ALL`.
//! - Rules are checked at assignment time only; stored posts are not
//!   re-validated when rules change.

use crate::validation::{
    validate_category, validate_content, validate_summary, validate_title, PostRules,
    ValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a post record.
pub type PostId = Uuid;

/// Accepted post categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Fiction")]
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Fiction, Category::NonFiction];

    /// Canonical string form, as stored and serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
        }
    }

    /// Exact, case-sensitive parse of the canonical string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Fiction" => Some(Self::Fiction),
            "Non-Fiction" => Some(Self::NonFiction),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: PostId,
    title: String,
    content: String,
    summary: String,
    category: Category,
}

/// Input payload for creating a post.
///
/// `category` stays a raw string here; it is checked by `validate_category`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: String,
    pub category: String,
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.summary.is_none()
            && self.category.is_none()
    }
}

impl Post {
    /// Creates a post with a generated id after validating every field.
    ///
    /// Fields are checked in order title, content, summary, category; the
    /// first failure is returned.
    pub fn new(draft: PostDraft, rules: &PostRules) -> Result<Self, ValidationError> {
        let title = validate_title(draft.title, rules)?;
        let content = validate_content(draft.content, rules)?;
        let summary = validate_summary(draft.summary, rules)?;
        let category = validate_category(&draft.category)?;
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            summary,
            category,
        })
    }

    pub(crate) fn from_storage(
        id: PostId,
        title: String,
        content: String,
        summary: String,
        category: Category,
    ) -> Self {
        Self {
            id,
            title,
            content,
            summary,
            category,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_title(
        &mut self,
        title: impl Into<String>,
        rules: &PostRules,
    ) -> Result<(), ValidationError> {
        self.title = validate_title(title, rules)?;
        Ok(())
    }

    pub fn set_content(
        &mut self,
        content: impl Into<String>,
        rules: &PostRules,
    ) -> Result<(), ValidationError> {
        self.content = validate_content(content, rules)?;
        Ok(())
    }

    pub fn set_summary(
        &mut self,
        summary: impl Into<String>,
        rules: &PostRules,
    ) -> Result<(), ValidationError> {
        self.summary = validate_summary(summary, rules)?;
        Ok(())
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), ValidationError> {
        self.category = validate_category(category)?;
        Ok(())
    }

    /// Applies every provided field, or none of them.
    ///
    /// All present fields are validated first; the record is only touched
    /// once the whole patch has passed.
    pub fn apply_patch(
        &mut self,
        patch: &PostPatch,
        rules: &PostRules,
    ) -> Result<(), ValidationError> {
        let title = patch
            .title
            .as_deref()
            .map(|value| validate_title(value, rules))
            .transpose()?;
        let content = patch
            .content
            .as_deref()
            .map(|value| validate_content(value, rules))
            .transpose()?;
        let summary = patch
            .summary
            .as_deref()
            .map(|value| validate_summary(value, rules))
            .transpose()?;
        let category = patch
            .category
            .as_deref()
            .map(validate_category)
            .transpose()?;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        if let Some(category) = category {
            self.category = category;
        }
        Ok(())
    }
}
