//! Durable todo record store.
//!
//! # Responsibility
//! - Provide create/lookup/list entry points over validated input.
//! - Enforce the `Open`/`Closed` store lifecycle.
//!
//! # Invariants
//! - All mutation passes through one mutex around id allocation plus
//!   write; readers never observe a partially written record.
//! - `created_at` is read from the clock exactly once per create.

use crate::db::{self, DbError, DbResult};
use crate::model::draft::TodoDraft;
use crate::model::todo::{Todo, TodoId};
use crate::repo::todo_repo::{RepoError, SqliteTodoRepository, TodoRepository};
use crate::store::clock::{Clock, SystemClock};
use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::Mutex;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for record operations.
#[derive(Debug)]
pub enum StoreError {
    /// The store was closed; this instance accepts no further operations.
    Closed,
    /// Underlying storage failure. Callers may retry a create with the same
    /// draft; id assignment has no deduplication key, so a retry after a
    /// partial failure can persist a duplicate record under a fresh id.
    Db(DbError),
    /// A persisted row violates model invariants.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "store is closed"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Closed | Self::InvalidData(_) => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Db(err) => Self::Db(err),
            RepoError::InvalidData(message) => Self::InvalidData(message),
        }
    }
}

enum StoreState {
    Open(Connection),
    Closed,
}

/// Durable todo record store and sole writer path.
///
/// The store exclusively owns record data; operations return owned copies.
pub struct TodoStore {
    state: Mutex<StoreState>,
    clock: Box<dyn Clock>,
}

impl TodoStore {
    /// Opens a file-backed store with the system clock.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Self::open_with_clock(path, Box::new(SystemClock))
    }

    /// Opens a file-backed store with a caller-provided clock.
    pub fn open_with_clock(path: impl AsRef<Path>, clock: Box<dyn Clock>) -> DbResult<Self> {
        Ok(Self::from_connection(db::open_db(path)?, clock))
    }

    /// Opens an in-memory store with the system clock.
    pub fn open_in_memory() -> DbResult<Self> {
        Self::open_in_memory_with_clock(Box::new(SystemClock))
    }

    /// Opens an in-memory store with a caller-provided clock.
    pub fn open_in_memory_with_clock(clock: Box<dyn Clock>) -> DbResult<Self> {
        Ok(Self::from_connection(db::open_db_in_memory()?, clock))
    }

    fn from_connection(conn: Connection, clock: Box<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(StoreState::Open(conn)),
            clock,
        }
    }

    /// Persists a validated draft as a new record.
    ///
    /// Allocates the next id, reads the clock once and writes the full row
    /// atomically. The returned record is the persisted state.
    pub fn create_todo(&self, draft: &TodoDraft) -> StoreResult<Todo> {
        let result = self.with_open_conn(|conn| {
            let created_at = self.clock.now();
            Ok(SqliteTodoRepository::new(conn).insert_todo(draft, created_at)?)
        });

        match &result {
            Ok(todo) => info!("event=todo_create module=store status=ok id={}", todo.id),
            Err(err) => error!("event=todo_create module=store status=error error={err}"),
        }

        result
    }

    /// Looks up one record by id.
    ///
    /// `None` means the id was never assigned to a persisted record; this
    /// is an expected outcome, not a failure.
    pub fn get_todo(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        self.with_open_conn(|conn| Ok(SqliteTodoRepository::new(conn).get_todo(id)?))
    }

    /// Lists every persisted record in ascending id order.
    pub fn list_todos(&self) -> StoreResult<Vec<Todo>> {
        self.with_open_conn(|conn| Ok(SqliteTodoRepository::new(conn).list_todos()?))
    }

    /// Closes the store, dropping the connection.
    ///
    /// Every later operation fails with `StoreError::Closed`. Reopening
    /// means constructing a new store over the same path.
    pub fn close(&self) {
        if let Ok(mut guard) = self.state.lock() {
            *guard = StoreState::Closed;
        }
        info!("event=store_close module=store status=ok");
    }

    /// Returns whether this store still accepts operations.
    pub fn is_open(&self) -> bool {
        match self.state.lock() {
            Ok(guard) => matches!(&*guard, StoreState::Open(_)),
            Err(_) => false,
        }
    }

    fn with_open_conn<T>(
        &self,
        op: impl FnOnce(&Connection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        // A poisoned lock means a caller panicked mid-operation; the
        // connection state is unknown, so the store counts as closed.
        let guard = self.state.lock().map_err(|_| StoreError::Closed)?;
        match &*guard {
            StoreState::Open(conn) => op(conn),
            StoreState::Closed => Err(StoreError::Closed),
        }
    }
}
