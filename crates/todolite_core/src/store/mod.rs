//! Record store lifecycle over repository persistence.
//!
//! # Responsibility
//! - Own the database connection as an explicit resource.
//! - Serialize id allocation plus write behind a single lock.
//! - Stamp every new record with an injectable clock.
//!
//! # Invariants
//! - Two concurrent creates are never assigned the same id.
//! - A closed store fails every operation with `StoreError::Closed`.

pub mod clock;
pub mod todo_store;
