//! Author use-case service.
//!
//! # Responsibility
//! - Provide register/rename/re-phone entry points for core callers.
//! - Run field validation against the repository before every write.
//!
//! # Invariants
//! - Nothing is written unless every changed field passed validation.
//! - A failed update leaves the stored record unchanged.
//! - Log lines carry ids and rule codes only, never names or numbers.

use crate::model::author::{Author, AuthorDraft, AuthorId};
use crate::repo::author_repo::{AuthorListQuery, AuthorRepository};
use crate::repo::{RepoError, RepoResult};
use crate::validation::AuthorNameLookup;
use log::{info, warn};

/// Use-case service wrapper for author operations.
pub struct AuthorService<R> {
    repo: R,
}

impl<R> AuthorService<R>
where
    R: AuthorRepository + AuthorNameLookup<Error = RepoError>,
{
    /// Creates a service over a repository that also answers name lookups.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and stores a new author.
    ///
    /// # Errors
    /// - `RepoError::Validation` for any failed field rule, including a
    ///   duplicate name caught by the storage backstop.
    pub fn register_author(&self, draft: &AuthorDraft) -> RepoResult<Author> {
        let result = Author::new(
            draft.name.as_str(),
            draft.phone_number.as_str(),
            &self.repo,
        )
        .and_then(|author| {
            self.repo.create_author(&author)?;
            Ok(author)
        });
        log_outcome("author_register", None, &result);
        result
    }

    /// Renames an existing author. Submitting the current name is a no-op
    /// that still succeeds.
    pub fn rename_author(&self, id: AuthorId, name: impl Into<String>) -> RepoResult<Author> {
        let result = self.load(id).and_then(|mut author| {
            author.set_name(name, &self.repo)?;
            self.repo.update_author(&author)?;
            Ok(author)
        });
        log_outcome("author_rename", Some(id), &result);
        result
    }

    pub fn change_phone_number(
        &self,
        id: AuthorId,
        phone_number: impl Into<String>,
    ) -> RepoResult<Author> {
        let result = self.load(id).and_then(|mut author| {
            author.set_phone_number(phone_number)?;
            self.repo.update_author(&author)?;
            Ok(author)
        });
        log_outcome("author_change_phone", Some(id), &result);
        result
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    pub fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>> {
        self.repo.list_authors(query)
    }

    pub fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        let result = self.repo.delete_author(id);
        match &result {
            Ok(()) => info!("event=author_delete module=service status=ok author_id={id}"),
            Err(err) => warn!(
                "event=author_delete module=service status=error author_id={id} error_code={}",
                err.code()
            ),
        }
        result
    }

    fn load(&self, id: AuthorId) -> RepoResult<Author> {
        self.repo.get_author(id)?.ok_or(RepoError::NotFound(id))
    }
}

fn log_outcome(event: &str, id: Option<AuthorId>, result: &RepoResult<Author>) {
    match result {
        Ok(author) => info!(
            "event={event} module=service status=ok author_id={}",
            author.id()
        ),
        Err(RepoError::Validation(err)) => warn!(
            "event={event} module=service status=rejected author_id={} error_code={}",
            id.map_or_else(|| "none".to_string(), |id| id.to_string()),
            err.code()
        ),
        Err(err) => warn!(
            "event={event} module=service status=error author_id={} error_code={}",
            id.map_or_else(|| "none".to_string(), |id| id.to_string()),
            err.code()
        ),
    }
}
