use std::sync::Arc;

use thiserror::Error;

use crate::models::employee::Employee;
use crate::repositories::{EmployeeRepository, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Employee not found with id {0}")]
    NotFound(i64),

    #[error("{0}")]
    ConstraintViolation(String),

    #[error("{0}")]
    Unclassified(String),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ConstraintViolation(msg) => ServiceError::ConstraintViolation(msg),
            StoreError::Backend(msg) => ServiceError::Unclassified(msg),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Employee operations on top of the persistence collaborator.
///
/// The service holds no state of its own. Updates and deletes read the row and then
/// write it back without a transaction, so two concurrent updates of the same id can
/// interleave and one of them is lost.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new record. Any id supplied by the caller is dropped.
    pub async fn create(&self, mut employee: Employee) -> ServiceResult<Employee> {
        employee.id = None;
        let saved = self.repository.save(employee).await?;
        tracing::info!(id = ?saved.id, "employee created");
        Ok(saved)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Employee> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.repository.find_all().await?)
    }

    /// Overwrite every mutable field, nulls included.
    pub async fn full_update(&self, id: i64, details: Employee) -> ServiceResult<Employee> {
        let mut employee = self.get_by_id(id).await?;
        employee.first_name = details.first_name;
        employee.last_name = details.last_name;
        employee.email = details.email;
        employee.position = details.position;
        employee.hire_date = details.hire_date;

        let saved = self.repository.save(employee).await?;
        tracing::info!(id, "employee updated");
        Ok(saved)
    }

    /// Overwrite only the fields present in `details`.
    pub async fn partial_update(&self, id: i64, details: Employee) -> ServiceResult<Employee> {
        let mut employee = self.get_by_id(id).await?;
        if let Some(first_name) = details.first_name {
            employee.first_name = Some(first_name);
        }
        if let Some(last_name) = details.last_name {
            employee.last_name = Some(last_name);
        }
        if let Some(email) = details.email {
            employee.email = Some(email);
        }
        if let Some(position) = details.position {
            employee.position = Some(position);
        }
        if let Some(hire_date) = details.hire_date {
            employee.hire_date = Some(hire_date);
        }

        let saved = self.repository.save(employee).await?;
        tracing::info!(id, "employee partially updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        let employee = self.get_by_id(id).await?;
        self.repository.delete(&employee).await?;
        tracing::info!(id, "employee deleted");
        Ok(())
    }

    pub async fn ping(&self) -> ServiceResult<()> {
        Ok(self.repository.ping().await?)
    }
}
