//! Department repository contract and store-generic implementation.
//!
//! # Invariants
//! - Same guard and error rules as the seller repository.
//! - Deleting a department still referenced by sellers fails with
//!   `Persistence` (foreign key violation); there is no cascade.

use crate::db::{GeneratedKeys, Guard, ResourceKind, RowCursor, SqlConnection, SqlStatement};
use crate::model::department::{Department, DepartmentId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::row_mapper::map_department_record;
use crate::repo::schema::{ensure_connection_ready, DEPARTMENT_TABLE_COLUMNS};
use log::debug;
use rusqlite::types::Value;
use rusqlite::Connection;

const DEPARTMENT_INSERT_SQL: &str = "INSERT INTO department (Name) VALUES (?)";
const DEPARTMENT_UPDATE_SQL: &str = "UPDATE department SET Name = ? WHERE Id = ?";
const DEPARTMENT_DELETE_SQL: &str = "DELETE FROM department WHERE Id = ?";
const DEPARTMENT_FIND_BY_ID_SQL: &str = "SELECT * FROM department WHERE Id = ?";
const DEPARTMENT_FIND_ALL_SQL: &str = "SELECT * FROM department ORDER BY Name";

/// Repository interface for department persistence.
pub trait DepartmentDao {
    /// Inserts `department`, writes the generated id back into it and returns it.
    fn insert(&self, department: &mut Department) -> RepoResult<DepartmentId>;
    /// Renames the department keyed by `department.id`; a missing row is ignored.
    fn update(&self, department: &Department) -> RepoResult<()>;
    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()>;
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Returns all departments ordered by name.
    fn find_all(&self) -> RepoResult<Vec<Department>>;
}

/// Department repository over any `SqlConnection`.
pub struct DepartmentRepository<'conn, C: SqlConnection = Connection> {
    conn: &'conn C,
}

impl<'conn, C: SqlConnection> DepartmentRepository<'conn, C> {
    /// Wraps a connection without checking its schema.
    pub fn new(conn: &'conn C) -> Self {
        Self { conn }
    }

    /// Runs one write, returning the affected-row count and any generated key.
    fn run_write(
        &self,
        sql: &str,
        keys: GeneratedKeys,
        params: &[Value],
    ) -> RepoResult<(usize, Option<i64>)> {
        let mut stmt = Guard::new(ResourceKind::Statement, self.conn.prepare_statement(sql, keys)?);
        let affected = stmt.execute(params)?;
        let key = if affected > 0 { stmt.generated_key()? } else { None };
        Ok((affected, key))
    }
}

impl<'conn> DepartmentRepository<'conn, Connection> {
    /// Constructs a repository from a migrated SQLite connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &[("department", DEPARTMENT_TABLE_COLUMNS)])?;
        Ok(Self::new(conn))
    }
}

impl<C: SqlConnection> DepartmentDao for DepartmentRepository<'_, C> {
    fn insert(&self, department: &mut Department) -> RepoResult<DepartmentId> {
        let (affected, key) = self.run_write(
            DEPARTMENT_INSERT_SQL,
            GeneratedKeys::Return,
            &[Value::Text(department.name.clone())],
        )?;
        if affected == 0 {
            return Err(RepoError::NoRowsAffected);
        }

        let id = key.ok_or(RepoError::MissingGeneratedKey)?;
        department.id = Some(id);

        debug!("event=department_insert module=repo status=ok department_id={id}");
        Ok(id)
    }

    fn update(&self, department: &Department) -> RepoResult<()> {
        let id = department.id.ok_or(RepoError::MissingId("department"))?;
        let (affected, _) = self.run_write(
            DEPARTMENT_UPDATE_SQL,
            GeneratedKeys::Discard,
            &[Value::Text(department.name.clone()), Value::Integer(id)],
        )?;

        debug!("event=department_update module=repo status=ok department_id={id} rows_affected={affected}");
        Ok(())
    }

    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()> {
        let (affected, _) = self.run_write(
            DEPARTMENT_DELETE_SQL,
            GeneratedKeys::Discard,
            &[Value::Integer(id)],
        )?;

        debug!("event=department_delete module=repo status=ok department_id={id} rows_affected={affected}");
        Ok(())
    }

    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = Guard::new(
            ResourceKind::Statement,
            self.conn
                .prepare_statement(DEPARTMENT_FIND_BY_ID_SQL, GeneratedKeys::Discard)?,
        );
        let mut cursor = Guard::new(ResourceKind::Cursor, stmt.query(&[Value::Integer(id)])?);

        if let Some(row) = cursor.next_row()? {
            return Ok(Some(map_department_record(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = Guard::new(
            ResourceKind::Statement,
            self.conn
                .prepare_statement(DEPARTMENT_FIND_ALL_SQL, GeneratedKeys::Discard)?,
        );
        let mut cursor = Guard::new(ResourceKind::Cursor, stmt.query(&[])?);

        let mut departments = Vec::new();
        while let Some(row) = cursor.next_row()? {
            departments.push(map_department_record(row)?);
        }
        Ok(departments)
    }
}
