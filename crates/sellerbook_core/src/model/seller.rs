//! Seller entity.
//!
//! # Invariants
//! - `department` is shared, never exclusively owned: sellers of the same
//!   department returned by one query point at the same allocation.

use crate::model::department::Department;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Store-assigned seller identifier.
pub type SellerId = i64;

/// Seller record joined with its owning department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// `None` until the seller has been inserted.
    pub id: Option<SellerId>,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub base_salary: f64,
    pub department: Arc<Department>,
}

impl Seller {
    /// Creates a seller that has not been persisted yet.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: f64,
        department: Arc<Department>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department,
        }
    }

    /// Returns whether this seller shares its department allocation with `other`.
    pub fn shares_department_with(&self, other: &Seller) -> bool {
        Arc::ptr_eq(&self.department, &other.department)
    }
}
