//! Statement/cursor contract consumed by the repositories.
//!
//! # Responsibility
//! - Describe the minimal connection surface repositories need: prepare,
//!   execute, query, read generated keys, release.
//! - Keep repositories independent from the concrete SQLite driver so tests
//!   can observe every acquire/release pair.
//!
//! # Invariants
//! - A cursor borrows its statement; it cannot outlive it.
//! - `Release::release` consumes the handle, so a handle is closed at most once.
//! - Cursors are forward-only.

use super::DbResult;
use rusqlite::types::{FromSql, Value};

/// Whether the store should keep the key it generates on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratedKeys {
    Discard,
    Return,
}

/// Handle that must be closed explicitly.
pub trait Release {
    /// Closes the handle. The returned error is the store's close-time error.
    fn release(self) -> DbResult<()>;
}

/// Connection able to prepare parameterized statements.
pub trait SqlConnection {
    type Statement<'c>: SqlStatement
    where
        Self: 'c;

    fn prepare_statement(&self, sql: &str, keys: GeneratedKeys) -> DbResult<Self::Statement<'_>>;
}

/// Prepared statement with positional `?` parameters.
pub trait SqlStatement: Release {
    type Cursor<'s>: RowCursor
    where
        Self: 's;

    /// Executes a write and returns the affected-row count.
    fn execute(&mut self, params: &[Value]) -> DbResult<usize>;

    /// Executes a read and returns a cursor positioned before the first row.
    fn query(&mut self, params: &[Value]) -> DbResult<Self::Cursor<'_>>;

    /// Key generated by the last `execute`.
    ///
    /// Returns `None` when keys were not requested at prepare time or the
    /// store produced none.
    fn generated_key(&self) -> DbResult<Option<i64>>;
}

/// Forward-only cursor over one query result.
pub trait RowCursor: Release {
    type Row: RowSource;

    /// Advances to the next row, returning `None` once exhausted.
    fn next_row(&mut self) -> DbResult<Option<&Self::Row>>;
}

/// Typed, name-based access to the current row.
pub trait RowSource {
    fn column<T: FromSql>(&self, name: &str) -> DbResult<T>;
}
