use chrono::NaiveDate;
use sellerbook_core::{Department, Seller};
use std::sync::Arc;

fn sample_seller(department: Arc<Department>) -> Seller {
    Seller::new(
        "Bob Brown",
        "bob@gmail.com",
        NaiveDate::from_ymd_opt(1998, 4, 21).unwrap(),
        1000.0,
        department,
    )
}

#[test]
fn new_entities_have_no_id() {
    let department = Arc::new(Department::new("Books"));
    let seller = sample_seller(Arc::clone(&department));

    assert_eq!(department.id, None);
    assert_eq!(seller.id, None);
    assert_eq!(seller.department.name, "Books");
}

#[test]
fn shares_department_with_compares_allocations_not_values() {
    let shared = Arc::new(Department::with_id(1, "Books"));
    let copy = Arc::new(Department::with_id(1, "Books"));

    let first = sample_seller(Arc::clone(&shared));
    let second = sample_seller(Arc::clone(&shared));
    let third = sample_seller(copy);

    assert!(first.shares_department_with(&second));
    assert!(!first.shares_department_with(&third));
    assert_eq!(first, third);
}

#[test]
fn seller_serialization_uses_expected_fields() {
    let mut seller = sample_seller(Arc::new(Department::with_id(2, "Electronics")));
    seller.id = Some(9);

    let json = serde_json::to_value(&seller).unwrap();
    assert_eq!(json["id"], 9);
    assert_eq!(json["name"], "Bob Brown");
    assert_eq!(json["email"], "bob@gmail.com");
    assert_eq!(json["birth_date"], "1998-04-21");
    assert_eq!(json["base_salary"], 1000.0);
    assert_eq!(json["department"]["id"], 2);
    assert_eq!(json["department"]["name"], "Electronics");

    let decoded: Seller = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, seller);
}
