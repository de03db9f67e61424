//! Seller repository contract and store-generic implementation.
//!
//! # Responsibility
//! - Provide create/update/delete/find APIs over the `seller` table joined
//!   with `department`.
//! - Keep SQL text and column names inside the persistence boundary.
//!
//! # Invariants
//! - Every statement and cursor is held by a `Guard` and released on all paths.
//! - Multi-row finds share one `Arc<Department>` per department id.
//! - `find_by_id` never reuses a department from another call.
//! - `update` and `delete_by_id` do not check that a row matched.

use crate::db::{GeneratedKeys, Guard, ResourceKind, RowCursor, SqlConnection, SqlStatement};
use crate::model::department::Department;
use crate::model::seller::{Seller, SellerId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::identity_cache::DepartmentCache;
use crate::repo::row_mapper::{map_department, map_seller};
use crate::repo::schema::{
    ensure_connection_ready, DEPARTMENT_TABLE_COLUMNS, SELLER_TABLE_COLUMNS,
};
use chrono::NaiveDate;
use log::debug;
use rusqlite::types::Value;
use rusqlite::Connection;
use std::sync::Arc;

const SELLER_INSERT_SQL: &str = "INSERT INTO seller (Name, Email, BirthDate, BaseSalary, DepartmentId) VALUES (?, ?, ?, ?, ?)";
const SELLER_UPDATE_SQL: &str = "UPDATE seller SET Name = ?, Email = ?, BirthDate = ?, BaseSalary = ?, DepartmentId = ? WHERE Id = ?";
const SELLER_DELETE_SQL: &str = "DELETE FROM seller WHERE id = ?";

const SELLER_JOIN_SQL: &str = "SELECT seller.*, department.Name AS DepName FROM seller INNER JOIN department ON seller.DepartmentId = department.Id";

fn find_by_id_sql() -> String {
    format!("{SELLER_JOIN_SQL} WHERE seller.Id = ?")
}

fn find_all_sql() -> String {
    format!("{SELLER_JOIN_SQL} ORDER BY Name")
}

fn find_by_department_sql() -> String {
    format!("{SELLER_JOIN_SQL} WHERE DepartmentId = ? ORDER BY Name")
}

/// Repository interface for seller persistence.
pub trait SellerDao {
    /// Inserts `seller`, writes the generated id back into it and returns it.
    ///
    /// # Errors
    /// - `NoRowsAffected` when the store reports zero inserted rows; the
    ///   seller id is left untouched.
    /// - `MissingId("department")` when the seller's department was never saved.
    fn insert(&self, seller: &mut Seller) -> RepoResult<SellerId>;
    /// Rewrites all columns of the row keyed by `seller.id`.
    ///
    /// Succeeds without effect when no row has that id.
    fn update(&self, seller: &Seller) -> RepoResult<()>;
    /// Deletes the seller row with `id`; deleting a missing id is not an error.
    fn delete_by_id(&self, id: SellerId) -> RepoResult<()>;
    /// Returns the seller with `id`, or `None` when absent.
    fn find_by_id(&self, id: SellerId) -> RepoResult<Option<Seller>>;
    /// Returns all sellers ordered by name.
    fn find_all(&self) -> RepoResult<Vec<Seller>>;
    /// Returns the sellers of `department` ordered by name.
    fn find_by_department(&self, department: &Department) -> RepoResult<Vec<Seller>>;
}

/// Seller repository over any `SqlConnection`.
///
/// Borrows the connection for its lifetime and issues one statement at a time.
pub struct SellerRepository<'conn, C: SqlConnection = Connection> {
    conn: &'conn C,
}

impl<'conn, C: SqlConnection> SellerRepository<'conn, C> {
    /// Wraps a connection without checking its schema.
    pub fn new(conn: &'conn C) -> Self {
        Self { conn }
    }

    fn query_sellers(&self, sql: &str, params: &[Value]) -> RepoResult<Vec<Seller>> {
        let mut stmt = Guard::new(
            ResourceKind::Statement,
            self.conn.prepare_statement(sql, GeneratedKeys::Discard)?,
        );
        let mut cursor = Guard::new(ResourceKind::Cursor, stmt.query(params)?);

        let mut departments = DepartmentCache::new();
        let mut sellers = Vec::new();
        while let Some(row) = cursor.next_row()? {
            let department = departments.resolve(row)?;
            sellers.push(map_seller(row, department)?);
        }

        debug!(
            "event=seller_query module=repo status=ok rows={} departments={}",
            sellers.len(),
            departments.len()
        );
        Ok(sellers)
    }
}

impl<'conn> SellerRepository<'conn, Connection> {
    /// Constructs a repository from a migrated SQLite connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` on schema drift.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            &[
                ("department", DEPARTMENT_TABLE_COLUMNS),
                ("seller", SELLER_TABLE_COLUMNS),
            ],
        )?;
        Ok(Self::new(conn))
    }
}

impl<C: SqlConnection> SellerDao for SellerRepository<'_, C> {
    fn insert(&self, seller: &mut Seller) -> RepoResult<SellerId> {
        let params = seller_columns(seller)?;
        let mut stmt = Guard::new(
            ResourceKind::Statement,
            self.conn
                .prepare_statement(SELLER_INSERT_SQL, GeneratedKeys::Return)?,
        );

        let affected = stmt.execute(&params)?;
        if affected == 0 {
            return Err(RepoError::NoRowsAffected);
        }

        let id = stmt.generated_key()?.ok_or(RepoError::MissingGeneratedKey)?;
        seller.id = Some(id);

        debug!("event=seller_insert module=repo status=ok seller_id={id}");
        Ok(id)
    }

    fn update(&self, seller: &Seller) -> RepoResult<()> {
        let id = seller.id.ok_or(RepoError::MissingId("seller"))?;
        let mut params = seller_columns(seller)?;
        params.push(Value::Integer(id));

        let mut stmt = Guard::new(
            ResourceKind::Statement,
            self.conn
                .prepare_statement(SELLER_UPDATE_SQL, GeneratedKeys::Discard)?,
        );
        let affected = stmt.execute(&params)?;

        debug!("event=seller_update module=repo status=ok seller_id={id} rows_affected={affected}");
        Ok(())
    }

    fn delete_by_id(&self, id: SellerId) -> RepoResult<()> {
        let mut stmt = Guard::new(
            ResourceKind::Statement,
            self.conn
                .prepare_statement(SELLER_DELETE_SQL, GeneratedKeys::Discard)?,
        );
        let affected = stmt.execute(&[Value::Integer(id)])?;

        debug!("event=seller_delete module=repo status=ok seller_id={id} rows_affected={affected}");
        Ok(())
    }

    fn find_by_id(&self, id: SellerId) -> RepoResult<Option<Seller>> {
        let sql = find_by_id_sql();
        let mut stmt = Guard::new(
            ResourceKind::Statement,
            self.conn.prepare_statement(&sql, GeneratedKeys::Discard)?,
        );
        let mut cursor = Guard::new(ResourceKind::Cursor, stmt.query(&[Value::Integer(id)])?);

        if let Some(row) = cursor.next_row()? {
            let department = Arc::new(map_department(row)?);
            return Ok(Some(map_seller(row, department)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Seller>> {
        self.query_sellers(&find_all_sql(), &[])
    }

    fn find_by_department(&self, department: &Department) -> RepoResult<Vec<Seller>> {
        let department_id = department.id.ok_or(RepoError::MissingId("department"))?;
        self.query_sellers(&find_by_department_sql(), &[Value::Integer(department_id)])
    }
}

/// Bind values for `Name, Email, BirthDate, BaseSalary, DepartmentId`.
fn seller_columns(seller: &Seller) -> RepoResult<Vec<Value>> {
    let department_id = seller
        .department
        .id
        .ok_or(RepoError::MissingId("department"))?;
    Ok(vec![
        Value::Text(seller.name.clone()),
        Value::Text(seller.email.clone()),
        date_to_db(seller.birth_date),
        Value::Real(seller.base_salary),
        Value::Integer(department_id),
    ])
}

fn date_to_db(date: NaiveDate) -> Value {
    Value::Text(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::{date_to_db, find_all_sql, find_by_department_sql, find_by_id_sql};
    use chrono::NaiveDate;
    use rusqlite::types::Value;

    #[test]
    fn join_queries_match_column_contract() {
        assert_eq!(
            find_by_id_sql(),
            "SELECT seller.*, department.Name AS DepName FROM seller INNER JOIN department ON seller.DepartmentId = department.Id WHERE seller.Id = ?"
        );
        assert!(find_all_sql().ends_with("department.Id ORDER BY Name"));
        assert!(find_by_department_sql().ends_with("WHERE DepartmentId = ? ORDER BY Name"));
    }

    #[test]
    fn dates_bind_as_iso_text() {
        let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        assert_eq!(date_to_db(date), Value::Text("1990-01-01".to_string()));
    }
}
