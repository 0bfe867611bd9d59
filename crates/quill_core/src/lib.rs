//! Core domain logic for Quill blog records.
//! This crate is the single source of truth for Author/Post field rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::author::{Author, AuthorDraft, AuthorId};
pub use model::post::{Category, Post, PostDraft, PostId, PostPatch};
pub use repo::author_repo::{AuthorListQuery, AuthorRepository, SqliteAuthorRepository};
pub use repo::post_repo::{PostListQuery, PostRepository, SqlitePostRepository};
pub use repo::{RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::post_service::PostService;
pub use validation::{
    validate_category, validate_content, validate_name, validate_phone, validate_summary,
    validate_title, AuthorNameLookup, PostRules, ValidationError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
