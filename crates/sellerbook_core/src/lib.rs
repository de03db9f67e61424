//! Data access for sellers and the departments that own them.
//!
//! Maps rows of the `seller`/`department` join to entity graphs where
//! sellers of one department share a single `Arc<Department>`, releasing
//! every statement and cursor on all exit paths.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::{Department, DepartmentId};
pub use model::seller::{Seller, SellerId};
pub use repo::department_repo::{DepartmentDao, DepartmentRepository};
pub use repo::error::{RepoError, RepoResult};
pub use repo::identity_cache::DepartmentCache;
pub use repo::seller_repo::{SellerDao, SellerRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
