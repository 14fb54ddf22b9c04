//! Todo domain record.
//!
//! # Responsibility
//! - Define the canonical persisted record returned by the store.
//! - Fix the wire shape exposed to transport-layer collaborators.
//!
//! # Invariants
//! - `id` is store-assigned, unique and monotonically increasing.
//! - `title` is never blank and never exceeds `MAX_TITLE_CHARS`.
//! - `created_at` is stamped once by the store clock and never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a persisted todo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = i64;

/// Upper bound on title length, counted in characters.
///
/// Matches the `length(title)` CHECK in the schema, which also counts
/// characters for TEXT columns.
pub const MAX_TITLE_CHARS: usize = 100;

/// A persisted todo record.
///
/// Instances are produced only by the store. Callers receive owned copies,
/// never a mutable view of persisted state.
///
/// Wire shape: `{id, title, description|null, created_at}` with
/// `created_at` as an RFC 3339 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique id assigned at creation. Never reused, even across restarts.
    pub id: TodoId,
    /// Non-blank title, at most `MAX_TITLE_CHARS` characters.
    pub title: String,
    /// Optional free-form body. Serialized as `null` when absent.
    pub description: Option<String>,
    /// Creation instant observed by the store clock.
    pub created_at: DateTime<Utc>,
}
