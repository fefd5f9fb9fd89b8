// In memory employee store.
//
// Rows live in an ordered map keyed by id, so `find_all` returns insertion order.
// Ids come from a counter that never reuses a value, deleted rows included.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EmployeeRepository, StoreError};
use crate::models::employee::Employee;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    table: RwLock<Table>,
    is_offline: bool,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Employee repository offline".to_string()));
        }
        Ok(())
    }
}

fn email_taken(table: &Table, email: Option<&str>, own_id: Option<i64>) -> bool {
    let Some(email) = email else {
        return false;
    };
    table
        .rows
        .values()
        .any(|row| row.id != own_id && row.email.as_deref() == Some(email))
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, mut employee: Employee) -> Result<Employee, StoreError> {
        self.ensure_online()?;
        let mut table = self.table.write().await;

        if email_taken(&table, employee.email.as_deref(), employee.id) {
            return Err(StoreError::ConstraintViolation(format!(
                "Duplicate entry '{}' for key 'employees.uk_employees_email'",
                employee.email.as_deref().unwrap_or_default()
            )));
        }

        let id = match employee.id {
            Some(id) => id,
            None => {
                table.last_id += 1;
                table.last_id
            }
        };
        employee.id = Some(id);
        table.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn delete(&self, employee: &Employee) -> Result<(), StoreError> {
        self.ensure_online()?;
        if let Some(id) = employee.id {
            self.table.write().await.rows.remove(&id);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(email: &str) -> Employee {
        Employee {
            first_name: Some("Alice".into()),
            last_name: Some("Smith".into()),
            email: Some(email.into()),
            position: Some("Engineer".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let repository = InMemoryEmployeeRepository::new();
        let first = repository.save(employee("a@example.com")).await.unwrap();
        let second = repository.save(employee("b@example.com")).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));

        repository.delete(&second).await.unwrap();
        let third = repository.save(employee("c@example.com")).await.unwrap();
        assert_eq!(third.id, Some(3));
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_email() {
        let repository = InMemoryEmployeeRepository::new();
        repository.save(employee("a@example.com")).await.unwrap();
        let result = repository.save(employee("a@example.com")).await;
        assert!(matches!(result, Err(StoreError::ConstraintViolation(_))));
        assert_eq!(repository.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_resaving_own_email_is_allowed() {
        let repository = InMemoryEmployeeRepository::new();
        let mut saved = repository.save(employee("a@example.com")).await.unwrap();
        saved.position = Some("Manager".into());
        let updated = repository.save(saved.clone()).await.unwrap();
        assert_eq!(updated, saved);
        assert_eq!(repository.find_by_id(1).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_missing_emails_do_not_collide() {
        let repository = InMemoryEmployeeRepository::new();
        repository.save(Employee::default()).await.unwrap();
        repository.save(Employee::default()).await.unwrap();
        assert_eq!(repository.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_fails_when_offline() {
        let mut repository = InMemoryEmployeeRepository::new();
        repository.toggle_offline();
        let result = repository.find_all().await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Employee repository offline")
        );
        assert!(repository.ping().await.is_err());
    }
}
