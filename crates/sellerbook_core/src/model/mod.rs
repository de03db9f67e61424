//! Domain entities mapped from the `department` and `seller` tables.
//!
//! # Invariants
//! - Entities are transient values built fresh per query.
//! - Ids are `None` until the store assigns them on insert.
//! - Sellers produced by one multi-row query share `Arc<Department>`
//!   instances per department id.

pub mod department;
pub mod seller;
