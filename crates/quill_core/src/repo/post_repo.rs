//! Post repository contracts and SQLite implementation.
//!
//! # Invariants
//! - `posts.category` only ever holds `Category::as_str()` values; the
//!   table CHECK constraint enforces the same set.
//! - Lists are sorted by `updated_at DESC, id ASC`.

use crate::model::post::{Category, Post, PostId};
use crate::repo::{parse_uuid, push_pagination, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const POST_SELECT_SQL: &str = "SELECT id, title, content, summary, category FROM posts";

/// Query options for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListQuery {
    /// Optional exact category filter.
    pub category: Option<Category>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for post persistence.
pub trait PostRepository {
    fn create_post(&self, post: &Post) -> RepoResult<PostId>;
    fn update_post(&self, post: &Post) -> RepoResult<()>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>>;
    fn delete_post(&self, id: PostId) -> RepoResult<()>;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &Post) -> RepoResult<PostId> {
        self.conn.execute(
            "INSERT INTO posts (id, title, content, summary, category)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                post.id().to_string(),
                post.title(),
                post.content(),
                post.summary(),
                post.category().as_str(),
            ],
        )?;

        Ok(post.id())
    }

    fn update_post(&self, post: &Post) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE posts
             SET
                title = ?1,
                content = ?2,
                summary = ?3,
                category = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?5;",
            params![
                post.title(),
                post.content(),
                post.summary(),
                post.category().as_str(),
                post.id().to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(post.id()));
        }
        Ok(())
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_post_row(row)?)),
            None => Ok(None),
        }
    }

    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        let mut sql = format!("{POST_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(category) = query.category {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Text(category.as_str().to_string()));
        }

        sql.push_str(" ORDER BY updated_at DESC, id ASC");
        push_pagination(&mut sql, &mut bind_values, query.limit, query.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }
        Ok(posts)
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM posts WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    let id_text: String = row.get("id")?;
    let id = parse_uuid(&id_text, "posts.id")?;

    let category_text: String = row.get("category")?;
    let category = Category::parse(&category_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid category `{category_text}` in posts.category"
        ))
    })?;

    Ok(Post::from_storage(
        id,
        row.get("title")?,
        row.get("content")?,
        row.get("summary")?,
        category,
    ))
}
