//! Persistence collaborator for employee records.
//!
//! The service only needs keyed save/find/delete; the store assigns ids and
//! enforces email uniqueness.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::employee::Employee;

pub mod in_memory;
pub mod mysql;

pub use in_memory::InMemoryEmployeeRepository;
pub use mysql::MySqlEmployeeRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    ConstraintViolation(String),

    #[error("{0}")]
    Backend(String),
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert when `employee.id` is `None`, otherwise overwrite the stored row.
    /// Returns the record as stored, id included.
    async fn save(&self, employee: Employee) -> Result<Employee, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;

    async fn delete(&self, employee: &Employee) -> Result<(), StoreError>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<(), StoreError>;
}
