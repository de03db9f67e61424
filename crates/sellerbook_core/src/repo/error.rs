//! Repository error channel.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors surfaced by seller and department repositories.
///
/// Store failures of any kind (connectivity, SQL, constraint, column type)
/// collapse into `Persistence`, carrying the driver message verbatim.
#[derive(Debug)]
pub enum RepoError {
    Persistence(DbError),
    /// A write executed but changed nothing where a change was required.
    NoRowsAffected,
    /// An insert succeeded but the store returned no generated key.
    MissingGeneratedKey,
    /// The entity passed to a write lacks the id the statement is keyed by.
    MissingId(&'static str),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistence(err) => write!(f, "{err}"),
            Self::NoRowsAffected => write!(f, "no rows affected"),
            Self::MissingGeneratedKey => write!(f, "insert returned no generated key"),
            Self::MissingId(entity) => write!(f, "{entity} has no id"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Persistence(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Persistence(DbError::Sqlite(value))
    }
}
