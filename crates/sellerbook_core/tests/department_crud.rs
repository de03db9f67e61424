use chrono::NaiveDate;
use sellerbook_core::db::open_db_in_memory;
use sellerbook_core::{
    Department, DepartmentDao, DepartmentRepository, RepoError, Seller, SellerDao,
    SellerRepository,
};
use std::sync::Arc;

#[test]
fn insert_assigns_id_and_find_by_id_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let repo = DepartmentRepository::try_new(&conn).unwrap();

    let mut department = Department::new("Computers");
    let id = repo.insert(&mut department).unwrap();

    assert_eq!(department.id, Some(id));
    assert_eq!(repo.find_by_id(id).unwrap(), Some(department));
}

#[test]
fn find_by_id_returns_none_for_missing_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = DepartmentRepository::try_new(&conn).unwrap();

    assert_eq!(repo.find_by_id(31).unwrap(), None);
}

#[test]
fn find_all_orders_by_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = DepartmentRepository::try_new(&conn).unwrap();
    for name in ["Fashion", "Books", "Electronics"] {
        repo.insert(&mut Department::new(name)).unwrap();
    }

    let names: Vec<_> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|department| department.name)
        .collect();
    assert_eq!(names, vec!["Books", "Electronics", "Fashion"]);
}

#[test]
fn update_renames_and_ignores_missing_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = DepartmentRepository::try_new(&conn).unwrap();
    let mut department = Department::new("Food");
    let id = repo.insert(&mut department).unwrap();

    department.name = "Groceries".to_string();
    repo.update(&department).unwrap();
    repo.update(&Department::with_id(id + 50, "Nowhere")).unwrap();

    assert_eq!(repo.find_by_id(id).unwrap().unwrap().name, "Groceries");
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn update_without_id_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = DepartmentRepository::try_new(&conn).unwrap();

    let err = repo.update(&Department::new("Draft")).unwrap_err();
    assert!(matches!(err, RepoError::MissingId("department")));
}

#[test]
fn delete_referenced_department_fails_with_persistence_error() {
    let conn = open_db_in_memory().unwrap();
    let departments = DepartmentRepository::try_new(&conn).unwrap();
    let sellers = SellerRepository::try_new(&conn).unwrap();
    let mut sales = Department::new("Sales");
    let sales_id = departments.insert(&mut sales).unwrap();
    let mut alice = Seller::new(
        "Alice",
        "alice@example.com",
        NaiveDate::from_ymd_opt(1988, 4, 9).unwrap(),
        3000.0,
        Arc::new(sales),
    );
    sellers.insert(&mut alice).unwrap();

    let err = departments.delete_by_id(sales_id).unwrap_err();
    assert!(matches!(err, RepoError::Persistence(_)));
    assert!(departments.find_by_id(sales_id).unwrap().is_some());

    sellers.delete_by_id(alice.id.unwrap()).unwrap();
    departments.delete_by_id(sales_id).unwrap();
    assert!(departments.find_by_id(sales_id).unwrap().is_none());
}
