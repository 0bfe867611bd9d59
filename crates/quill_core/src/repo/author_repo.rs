//! Author repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `authors` table.
//! - Serve as the name-lookup capability for the uniqueness rule.
//!
//! # Invariants
//! - A UNIQUE violation on `authors.name` surfaces as
//!   `ValidationError::DuplicateName`, the same error the validator raises.
//! - Delete is a hard delete and runs no validation.

use crate::model::author::{Author, AuthorId};
use crate::repo::{parse_uuid, push_pagination, RepoError, RepoResult};
use crate::validation::{AuthorNameLookup, ValidationError};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const AUTHOR_SELECT_SQL: &str = "SELECT id, name, phone_number FROM authors";

/// Query options for listing authors, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorListQuery {
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for author persistence.
pub trait AuthorRepository {
    fn create_author(&self, author: &Author) -> RepoResult<AuthorId>;
    fn update_author(&self, author: &Author) -> RepoResult<()>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Exact, case-sensitive name match. Returns zero or one author.
    fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>>;
    fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>>;
    fn delete_author(&self, id: AuthorId) -> RepoResult<()>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&self, author: &Author) -> RepoResult<AuthorId> {
        self.conn
            .execute(
                "INSERT INTO authors (id, name, phone_number) VALUES (?1, ?2, ?3);",
                params![
                    author.id().to_string(),
                    author.name(),
                    author.phone_number()
                ],
            )
            .map_err(map_write_error)?;

        Ok(author.id())
    }

    fn update_author(&self, author: &Author) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE authors
                 SET
                    name = ?1,
                    phone_number = ?2,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?3;",
                params![
                    author.name(),
                    author.phone_number(),
                    author.id().to_string()
                ],
            )
            .map_err(map_write_error)?;

        if changed == 0 {
            return Err(RepoError::NotFound(author.id()));
        }
        Ok(())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.query_one(&format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"), &id.to_string())
    }

    fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>> {
        self.query_one(&format!("{AUTHOR_SELECT_SQL} WHERE name = ?1;"), name)
    }

    fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>> {
        let mut sql = format!("{AUTHOR_SELECT_SQL} ORDER BY name ASC, id ASC");
        let mut bind_values: Vec<Value> = Vec::new();
        push_pagination(&mut sql, &mut bind_values, query.limit, query.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut authors = Vec::new();
        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }
        Ok(authors)
    }

    fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM authors WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

impl AuthorNameLookup for SqliteAuthorRepository<'_> {
    type Error = RepoError;

    fn find_author_id_by_name(&self, name: &str) -> RepoResult<Option<AuthorId>> {
        let id_text: Option<String> = self
            .conn
            .query_row("SELECT id FROM authors WHERE name = ?1;", [name], |row| {
                row.get(0)
            })
            .optional()?;
        id_text
            .map(|value| parse_uuid(&value, "authors.id"))
            .transpose()
    }
}

impl SqliteAuthorRepository<'_> {
    fn query_one(&self, sql: &str, key: &str) -> RepoResult<Option<Author>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_author_row(row)?)),
            None => Ok(None),
        }
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    let id_text: String = row.get("id")?;
    let id = parse_uuid(&id_text, "authors.id")?;
    Ok(Author::from_storage(
        id,
        row.get("name")?,
        row.get("phone_number")?,
    ))
}

fn map_write_error(err: rusqlite::Error) -> RepoError {
    if is_name_unique_violation(&err) {
        return RepoError::Validation(ValidationError::DuplicateName);
    }
    err.into()
}

fn is_name_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(inner, message) => {
            inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                && message
                    .as_deref()
                    .is_some_and(|text| text.contains("authors.name"))
        }
        _ => false,
    }
}
