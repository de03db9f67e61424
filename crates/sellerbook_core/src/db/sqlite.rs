//! `rusqlite` implementation of the store seam.

use super::store::{GeneratedKeys, Release, RowCursor, RowSource, SqlConnection, SqlStatement};
use super::DbResult;
use rusqlite::types::{FromSql, Value};
use rusqlite::{params_from_iter, Connection, Row, Rows, Statement};

/// Prepared SQLite statement, finalized on release.
pub struct SqliteStatement<'conn> {
    conn: &'conn Connection,
    stmt: Statement<'conn>,
    keys: GeneratedKeys,
}

/// Row cursor over a running SQLite statement.
pub struct SqliteCursor<'stmt> {
    rows: Rows<'stmt>,
}

impl SqlConnection for Connection {
    type Statement<'c>
        = SqliteStatement<'c>
    where
        Self: 'c;

    fn prepare_statement(&self, sql: &str, keys: GeneratedKeys) -> DbResult<SqliteStatement<'_>> {
        let stmt = Connection::prepare(self, sql)?;
        Ok(SqliteStatement {
            conn: self,
            stmt,
            keys,
        })
    }
}

impl<'conn> SqlStatement for SqliteStatement<'conn> {
    type Cursor<'s>
        = SqliteCursor<'s>
    where
        Self: 's;

    fn execute(&mut self, params: &[Value]) -> DbResult<usize> {
        Ok(self.stmt.execute(params_from_iter(params.iter()))?)
    }

    fn query(&mut self, params: &[Value]) -> DbResult<SqliteCursor<'_>> {
        let rows = self.stmt.query(params_from_iter(params.iter()))?;
        Ok(SqliteCursor { rows })
    }

    fn generated_key(&self) -> DbResult<Option<i64>> {
        match self.keys {
            GeneratedKeys::Return => Ok(Some(self.conn.last_insert_rowid())),
            GeneratedKeys::Discard => Ok(None),
        }
    }
}

impl Release for SqliteStatement<'_> {
    fn release(self) -> DbResult<()> {
        Ok(self.stmt.finalize()?)
    }
}

impl<'stmt> RowCursor for SqliteCursor<'stmt> {
    type Row = Row<'stmt>;

    fn next_row(&mut self) -> DbResult<Option<&Row<'stmt>>> {
        Ok(self.rows.next()?)
    }
}

impl Release for SqliteCursor<'_> {
    fn release(self) -> DbResult<()> {
        // Dropping `Rows` resets the underlying statement.
        drop(self.rows);
        Ok(())
    }
}

impl RowSource for Row<'_> {
    fn column<T: FromSql>(&self, name: &str) -> DbResult<T> {
        Ok(self.get(name)?)
    }
}
