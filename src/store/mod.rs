pub mod postgres;

use async_trait::async_trait;
use std::fmt;

use crate::models::employee::{Employee, EmployeeFields};

/// Number of records per page for the paginated listing.
pub const PAGE_SIZE: i64 = 2;

/// Failures surfaced by the persistence layer. Handlers map these to HTTP
/// statuses once, at the boundary, instead of catching broadly per handler.
#[derive(Debug)]
pub enum StoreError {
    /// The store rejected a write due to a data constraint (uniqueness,
    /// not-null), as opposed to a transient fault.
    Integrity(String),
    /// Any other persistence failure.
    Database(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Integrity(msg) => write!(f, "{}", msg),
            StoreError::Database(msg) => write!(f, "{}", msg),
        }
    }
}

/// Access layer over the `employees` table. Handlers receive an
/// implementation through `web::Data<dyn EmployeeStore>`, so tests can
/// substitute an in-memory store for the Postgres-backed one.
///
/// Writes are transactional per call: committed on success, rolled back on
/// any error. Reads are ordered by id ascending so pagination is
/// deterministic.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Returns the `page`-th slice (1-based) of all employees, `PAGE_SIZE`
    /// records per page, ordered by id ascending. A page beyond the end is
    /// an empty vec, not an error.
    async fn list_page(&self, page: i64) -> Result<Vec<Employee>, StoreError>;

    /// Returns all employees with age strictly greater than `age`, ordered
    /// by id ascending.
    async fn list_age_greater_than(&self, age: i32) -> Result<Vec<Employee>, StoreError>;

    async fn get(&self, id: i32) -> Result<Option<Employee>, StoreError>;

    /// Inserts a new employee; the store assigns the id.
    async fn insert(&self, fields: EmployeeFields) -> Result<Employee, StoreError>;

    /// Overwrites name, age and dept of an existing record (full replace).
    async fn update(&self, id: i32, fields: EmployeeFields) -> Result<(), StoreError>;

    async fn delete(&self, id: i32) -> Result<(), StoreError>;
}
