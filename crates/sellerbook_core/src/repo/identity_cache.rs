//! Per-query department identity map.
//!
//! # Invariants
//! - One cache lives for exactly one multi-row query and is dropped with it.
//! - Each department id maps to a single `Arc<Department>`; later rows with
//!   the same id reuse it without re-reading the department columns.

use crate::db::{DbResult, RowSource};
use crate::model::department::{Department, DepartmentId};
use crate::repo::row_mapper::{map_department, SELLER_DEPARTMENT_ID_COLUMN};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct DepartmentCache {
    entries: HashMap<DepartmentId, Arc<Department>>,
}

impl DepartmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared department for the row's `DepartmentId`, mapping
    /// and caching it on first sight.
    pub fn resolve<R: RowSource>(&mut self, row: &R) -> DbResult<Arc<Department>> {
        let id: DepartmentId = row.column(SELLER_DEPARTMENT_ID_COLUMN)?;
        match self.entries.entry(id) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let department = Arc::new(map_department(row)?);
                Ok(Arc::clone(entry.insert(department)))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
