//! SQLite storage bootstrap, store seam and scoped resource release.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the seller/department schema.
//! - Apply schema migrations in deterministic order.
//! - Define the statement/cursor contract repositories are written against.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Every acquired statement or cursor is released exactly once.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod guard;
pub mod migrations;
mod open;
pub mod sqlite;
pub mod store;

pub use guard::{close_quietly, Guard, ResourceKind};
pub use open::{open_db, open_db_in_memory};
pub use sqlite::{SqliteCursor, SqliteStatement};
pub use store::{GeneratedKeys, Release, RowCursor, RowSource, SqlConnection, SqlStatement};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Failure reported by a non-SQLite store implementation.
    Driver(String),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Driver(message) => write!(f, "{message}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Driver(_) => None,
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
