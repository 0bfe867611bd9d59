//! Post use-case service.
//!
//! # Responsibility
//! - Provide create/edit/get/list/delete entry points for posts.
//! - Own the `PostRules` used for every write.
//!
//! # Invariants
//! - Edits are all-or-nothing: one invalid field rejects the whole patch.
//! - Stored posts are not re-validated when rules change.

use crate::model::post::{Post, PostDraft, PostId, PostPatch};
use crate::repo::post_repo::{PostListQuery, PostRepository};
use crate::repo::{RepoError, RepoResult};
use crate::validation::PostRules;
use log::{info, warn};

/// Post service facade over repository implementations.
pub struct PostService<R: PostRepository> {
    repo: R,
    rules: PostRules,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a service with the default rule set.
    pub fn new(repo: R) -> Self {
        Self::with_rules(repo, PostRules::default())
    }

    pub fn with_rules(repo: R, rules: PostRules) -> Self {
        Self { repo, rules }
    }

    pub fn rules(&self) -> &PostRules {
        &self.rules
    }

    /// Validates and stores a new post.
    pub fn create_post(&self, draft: PostDraft) -> RepoResult<Post> {
        let result = Post::new(draft, &self.rules)
            .map_err(RepoError::from)
            .and_then(|post| {
                self.repo.create_post(&post)?;
                Ok(post)
            });
        log_outcome("post_create", None, &result);
        result
    }

    /// Applies a partial update to an existing post.
    ///
    /// An empty patch returns the stored post without writing.
    pub fn edit_post(&self, id: PostId, patch: &PostPatch) -> RepoResult<Post> {
        let result = self.load(id).and_then(|mut post| {
            if patch.is_empty() {
                return Ok(post);
            }
            post.apply_patch(patch, &self.rules)?;
            self.repo.update_post(&post)?;
            Ok(post)
        });
        log_outcome("post_edit", Some(id), &result);
        result
    }

    pub fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    pub fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        self.repo.list_posts(query)
    }

    pub fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let result = self.repo.delete_post(id);
        match &result {
            Ok(()) => info!("event=post_delete module=service status=ok post_id={id}"),
            Err(err) => warn!(
                "event=post_delete module=service status=error post_id={id} error_code={}",
                err.code()
            ),
        }
        result
    }

    fn load(&self, id: PostId) -> RepoResult<Post> {
        self.repo.get_post(id)?.ok_or(RepoError::NotFound(id))
    }
}

fn log_outcome(event: &str, id: Option<PostId>, result: &RepoResult<Post>) {
    let err = match result {
        Ok(post) => {
            info!(
                "event={event} module=service status=ok post_id={} category={}",
                post.id(),
                post.category()
            );
            return;
        }
        Err(err) => err,
    };
    let status = if err.as_validation().is_some() {
        "rejected"
    } else {
        "error"
    };
    warn!(
        "event={event} module=service status={status} post_id={} error_code={}",
        id.map_or_else(|| "none".to_string(), |id| id.to_string()),
        err.code()
    );
}
