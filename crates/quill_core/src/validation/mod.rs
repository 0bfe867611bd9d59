//! Field-level validation rules for Author and Post records.
//!
//! # Responsibility
//! - Expose pure validator functions, one per guarded field.
//! - Define the single error kind surfaced by every rule.
//!
//! # Invariants
//! - Validators never mutate or normalize the candidate value.
//! - Every failure maps to exactly one `ValidationError` variant.
//!
//! # See also
//! - DESIGN.md (clickbait policy decision)

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author;
pub mod post;

pub use author::{validate_name, validate_phone, AuthorNameLookup};
pub use post::{
    validate_category, validate_content, validate_summary, validate_title, PostRules,
    CONTENT_MIN_CHARS, DEFAULT_CLICKBAIT_PHRASES, SUMMARY_MAX_CHARS,
};

/// Rule failure raised before a field value is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty or whitespace-only.
    MissingName,
    /// Another author already owns this exact name.
    DuplicateName,
    /// Phone number is not exactly ten decimal digits.
    InvalidPhone,
    /// Post title is empty or whitespace-only.
    MissingTitle,
    /// Post title contains a configured clickbait phrase.
    ClickbaitTitle { phrase: String },
    /// Post content is below the configured minimum length.
    ContentTooShort,
    /// Post summary exceeds the configured maximum length.
    SummaryTooLong,
    /// Category is not one of the accepted values.
    InvalidCategory(String),
}

impl ValidationError {
    /// Stable machine-readable code, safe to put in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::DuplicateName => "duplicate_name",
            Self::InvalidPhone => "invalid_phone",
            Self::MissingTitle => "missing_title",
            Self::ClickbaitTitle { .. } => "clickbait_title",
            Self::ContentTooShort => "content_too_short",
            Self::SummaryTooLong => "summary_too_long",
            Self::InvalidCategory(_) => "invalid_category",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "Author must have a name"),
            Self::DuplicateName => write!(f, "Author name must be unique"),
            Self::InvalidPhone => write!(f, "Phone number must be exactly 10 digits"),
            Self::MissingTitle => write!(f, "Post must have a title"),
            Self::ClickbaitTitle { .. } => write!(f, "Clickbait titles are not allowed"),
            Self::ContentTooShort => write!(f, "Content too short"),
            Self::SummaryTooLong => write!(f, "Summary too long"),
            Self::InvalidCategory(_) => write!(f, "Invalid category"),
        }
    }
}

impl Error for ValidationError {}
