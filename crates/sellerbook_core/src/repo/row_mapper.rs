//! Conversions from the current cursor row to entities.
//!
//! Mappers read columns by name and never recover from a bad column: a
//! missing column or a type mismatch is returned to the caller as-is.

use crate::db::{DbResult, RowSource};
use crate::model::department::Department;
use crate::model::seller::Seller;
use chrono::NaiveDate;
use std::sync::Arc;

pub const SELLER_ID_COLUMN: &str = "Id";
pub const SELLER_NAME_COLUMN: &str = "Name";
pub const SELLER_EMAIL_COLUMN: &str = "Email";
pub const SELLER_BIRTH_DATE_COLUMN: &str = "BirthDate";
pub const SELLER_BASE_SALARY_COLUMN: &str = "BaseSalary";
pub const SELLER_DEPARTMENT_ID_COLUMN: &str = "DepartmentId";
/// Alias given to `department.Name` by the seller join query.
pub const DEPARTMENT_NAME_ALIAS: &str = "DepName";

/// Maps the department half of a seller join row (`DepartmentId`, `DepName`).
pub fn map_department<R: RowSource>(row: &R) -> DbResult<Department> {
    Ok(Department {
        id: Some(row.column(SELLER_DEPARTMENT_ID_COLUMN)?),
        name: row.column(DEPARTMENT_NAME_ALIAS)?,
    })
}

/// Maps a seller join row, attaching `department` instead of re-reading it.
pub fn map_seller<R: RowSource>(row: &R, department: Arc<Department>) -> DbResult<Seller> {
    Ok(Seller {
        id: Some(row.column(SELLER_ID_COLUMN)?),
        name: row.column(SELLER_NAME_COLUMN)?,
        email: row.column(SELLER_EMAIL_COLUMN)?,
        base_salary: row.column(SELLER_BASE_SALARY_COLUMN)?,
        birth_date: row.column::<NaiveDate>(SELLER_BIRTH_DATE_COLUMN)?,
        department,
    })
}

/// Maps a row of the plain `department` table (`Id`, `Name`).
pub fn map_department_record<R: RowSource>(row: &R) -> DbResult<Department> {
    Ok(Department {
        id: Some(row.column("Id")?),
        name: row.column("Name")?,
    })
}


#[cfg(test)]
mod tests {
    use super::test_rows::{seller_row, MapRow};
    use super::{map_department, map_department_record, map_seller};
    use crate::model::department::Department;
    use chrono::NaiveDate;
    use rusqlite::types::Value;
    use std::sync::Arc;

    #[test]
    fn map_department_reads_join_columns() {
        let department = map_department(&seller_row(1, "Alice", 7, "Sales")).unwrap();
        assert_eq!(department, Department::with_id(7, "Sales"));
    }

    #[test]
    fn map_seller_attaches_supplied_department() {
        let row = seller_row(3, "Carl", 7, "Sales");
        let department = Arc::new(Department::with_id(99, "Supplied"));

        let seller = map_seller(&row, Arc::clone(&department)).unwrap();

        assert_eq!(seller.id, Some(3));
        assert_eq!(seller.name, "Carl");
        assert_eq!(seller.email, "carl@example.com");
        assert_eq!(
            seller.birth_date,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
        assert_eq!(seller.base_salary, 1000.0);
        assert!(Arc::ptr_eq(&seller.department, &department));
    }

    #[test]
    fn map_seller_propagates_malformed_date() {
        let mut row = seller_row(3, "Carl", 7, "Sales");
        row.0[3].1 = Value::Text("not a date".to_string());

        let err = map_seller(&row, Arc::new(Department::with_id(7, "Sales"))).unwrap_err();
        assert!(err.to_string().contains("BirthDate"));
    }

    #[test]
    fn map_department_record_reads_table_columns() {
        let row = MapRow(vec![
            ("Id", Value::Integer(4)),
            ("Name", Value::Text("Books".to_string())),
        ]);
        assert_eq!(
            map_department_record(&row).unwrap(),
            Department::with_id(4, "Books")
        );
    }

    #[test]
    fn map_department_requires_alias_column() {
        let row = MapRow(vec![("DepartmentId", Value::Integer(4))]);
        assert!(map_department(&row).is_err());
    }
}
