//! Storage layer for the Namibia Hockey Union CLI
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `teams` / `players` / `events` / `matches` / `users`: CRUD operations per entity
//! - `seed`: Sample data for first runs

pub mod events;
pub mod matches;
pub mod models;
pub mod players;
pub mod schema;
pub mod seed;
pub mod teams;
pub mod users;

#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::FederationDatabase;

use std::str::FromStr;

/// Unix timestamp used for created/updated columns.
pub(crate) fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Parse a TEXT column into a typed enum, reporting a conversion failure
/// in rusqlite's own error vocabulary so row mappers stay composable.
pub(crate) fn text_column<T>(idx: usize, value: &str) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    T::from_str(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}
