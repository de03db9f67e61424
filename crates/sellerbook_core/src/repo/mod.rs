//! Repository layer: row mapping, per-query identity map, seller and
//! department data access.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep SQL text and column names out of callers.
//!
//! # Invariants
//! - Store failures surface as `RepoError::Persistence`; nothing retries.
//! - Empty single-row lookups return `Ok(None)`, not an error.

pub mod department_repo;
pub mod error;
pub mod identity_cache;
pub mod row_mapper;
mod schema;
pub mod seller_repo;
