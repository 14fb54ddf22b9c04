//! Todo repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/lookup/list over the `todos` table.
//! - Keep SQL inside the core persistence boundary.
//!
//! # Invariants
//! - `insert_todo` persists exactly the draft values plus the
//!   store-assigned id and creation instant.
//! - Rows violating model invariants surface as `InvalidData`.

use crate::db::DbError;
use crate::model::draft::TodoDraft;
use crate::model::todo::{Todo, TodoId, MAX_TITLE_CHARS};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TODO_SELECT_SQL: &str = "SELECT id, title, description, created_at FROM todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for todo persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for todo records.
///
/// Update and delete are intentionally absent: persisted records are
/// immutable in this store.
pub trait TodoRepository {
    fn insert_todo(&self, draft: &TodoDraft, created_at: DateTime<Utc>) -> RepoResult<Todo>;
    fn get_todo(&self, id: TodoId) -> RepoResult<Option<Todo>>;
    fn list_todos(&self) -> RepoResult<Vec<Todo>>;
}

/// SQLite-backed todo repository.
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn insert_todo(&self, draft: &TodoDraft, created_at: DateTime<Utc>) -> RepoResult<Todo> {
        self.conn.execute(
            "INSERT INTO todos (title, description, created_at) VALUES (?1, ?2, ?3);",
            params![
                draft.title(),
                draft.description(),
                created_at.to_rfc3339(),
            ],
        )?;

        Ok(Todo {
            id: self.conn.last_insert_rowid(),
            title: draft.title().to_string(),
            description: draft.description().map(str::to_string),
            created_at,
        })
    }

    fn get_todo(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }

        Ok(None)
    }

    fn list_todos(&self) -> RepoResult<Vec<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut todos = Vec::new();
        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        Ok(todos)
    }
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<Todo> {
    let id: TodoId = row.get("id")?;

    let title: String = row.get("title")?;
    if title.trim().is_empty() || title.chars().count() > MAX_TITLE_CHARS {
        return Err(RepoError::InvalidData(format!(
            "title of todo {id} violates length bounds"
        )));
    }

    let created_at_text: String = row.get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_text)
        .map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid created_at value `{created_at_text}` for todo {id}"
            ))
        })?
        .with_timezone(&Utc);

    Ok(Todo {
        id,
        title,
        description: row.get("description")?,
        created_at,
    })
}
