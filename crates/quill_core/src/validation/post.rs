//! Post field validators and their configurable thresholds.
//!
//! # Invariants
//! - Lengths are counted in characters, never bytes.
//! - Titles containing any configured clickbait phrase are rejected.
//!   There is no "require clickbait" mode.
//! - Category matching is exact and case-sensitive.

use super::ValidationError;
use crate::model::post::Category;
use serde::{Deserialize, Serialize};

/// Minimum post content length, in characters.
pub const CONTENT_MIN_CHARS: usize = 250;
/// Maximum post summary length, in characters.
pub const SUMMARY_MAX_CHARS: usize = 250;
/// Phrases that mark a title as clickbait (case-insensitive substring match).
pub const DEFAULT_CLICKBAIT_PHRASES: &[&str] =
    &["secret", "top", "guess", "won't believe", "shocking"];

/// Tunable thresholds for post validation.
///
/// Missing fields fall back to the defaults when deserialized, so hosts can
/// override a single rule from their own config source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRules {
    pub content_min_chars: usize,
    pub summary_max_chars: usize,
    pub clickbait_phrases: Vec<String>,
}

impl Default for PostRules {
    fn default() -> Self {
        Self {
            content_min_chars: CONTENT_MIN_CHARS,
            summary_max_chars: SUMMARY_MAX_CHARS,
            clickbait_phrases: DEFAULT_CLICKBAIT_PHRASES
                .iter()
                .map(|phrase| (*phrase).to_string())
                .collect(),
        }
    }
}

impl PostRules {
    /// Returns the first configured phrase found in `title`, if any.
    ///
    /// Blank phrases are ignored; they would otherwise match every title.
    pub fn clickbait_phrase_in(&self, title: &str) -> Option<&str> {
        let haystack = title.to_lowercase();
        self.clickbait_phrases
            .iter()
            .map(|phrase| phrase.trim())
            .filter(|phrase| !phrase.is_empty())
            .find(|phrase| haystack.contains(&phrase.to_lowercase()))
    }
}

/// Validates a post title against emptiness and the clickbait blocklist.
pub fn validate_title(
    title: impl Into<String>,
    rules: &PostRules,
) -> Result<String, ValidationError> {
    let title = title.into();
    if title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if let Some(phrase) = rules.clickbait_phrase_in(&title) {
        return Err(ValidationError::ClickbaitTitle {
            phrase: phrase.to_string(),
        });
    }
    Ok(title)
}

/// Validates that content is non-empty and at least `content_min_chars` long.
pub fn validate_content(
    content: impl Into<String>,
    rules: &PostRules,
) -> Result<String, ValidationError> {
    let content = content.into();
    if content.is_empty() || content.chars().count() < rules.content_min_chars {
        return Err(ValidationError::ContentTooShort);
    }
    Ok(content)
}

/// Validates an optional summary; empty is always accepted.
pub fn validate_summary(
    summary: impl Into<String>,
    rules: &PostRules,
) -> Result<String, ValidationError> {
    let summary = summary.into();
    if summary.chars().count() > rules.summary_max_chars {
        return Err(ValidationError::SummaryTooLong);
    }
    Ok(summary)
}

pub fn validate_category(category: &str) -> Result<Category, ValidationError> {
    Category::parse(category)
        .ok_or_else(|| ValidationError::InvalidCategory(category.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{validate_content, validate_summary, validate_title, PostRules};
    use crate::validation::ValidationError;

    #[test]
    fn clickbait_match_ignores_case() {
        let rules = PostRules::default();
        assert_eq!(
            rules.clickbait_phrase_in("You WON'T BELIEVE this"),
            Some("won't believe")
        );
        assert_eq!(rules.clickbait_phrase_in("A quiet harbour"), None);
    }

    #[test]
    fn clickbait_match_is_substring_not_word() {
        let rules = PostRules::default();
        // "stop" contains "top".
        assert_eq!(rules.clickbait_phrase_in("Bus stop diaries"), Some("top"));
    }

    #[test]
    fn blank_phrases_never_match() {
        let rules = PostRules {
            clickbait_phrases: vec!["".to_string(), "  ".to_string()],
            ..PostRules::default()
        };
        assert_eq!(
            validate_title("Any title", &rules),
            Ok("Any title".to_string())
        );
    }

    #[test]
    fn emptiness_is_checked_before_clickbait() {
        assert_eq!(
            validate_title("  ", &PostRules::default()),
            Err(ValidationError::MissingTitle)
        );
    }

    #[test]
    fn length_rules_count_characters_not_bytes() {
        let rules = PostRules::default();
        let content = "é".repeat(250);
        assert!(content.len() > 250);
        assert!(validate_content(content, &rules).is_ok());

        let summary = "ü".repeat(250);
        assert!(validate_summary(summary, &rules).is_ok());
    }

    #[test]
    fn custom_thresholds_are_honored() {
        let rules = PostRules {
            content_min_chars: 5,
            summary_max_chars: 3,
            ..PostRules::default()
        };
        assert!(validate_content("12345", &rules).is_ok());
        assert_eq!(
            validate_content("1234", &rules),
            Err(ValidationError::ContentTooShort)
        );
        assert_eq!(
            validate_summary("1234", &rules),
            Err(ValidationError::SummaryTooLong)
        );
    }

    #[test]
    fn zero_minimum_still_rejects_empty_content() {
        let rules = PostRules {
            content_min_chars: 0,
            ..PostRules::default()
        };
        assert_eq!(
            validate_content("", &rules),
            Err(ValidationError::ContentTooShort)
        );
    }
}
