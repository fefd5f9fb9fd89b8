use async_trait::async_trait;
use sqlx::MySqlPool;

use super::{EmployeeRepository, StoreError};
use crate::models::employee::Employee;

/// MySQL-backed employee store over the `employees` table.
#[derive(Clone)]
pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, employee: &Employee) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO employees (first_name, last_name, email, position, hire_date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.position)
        .bind(employee.hire_date)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_id() as i64)
    }

    async fn update(&self, id: i64, employee: &Employee) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE employees
            SET first_name = ?, last_name = ?, email = ?, position = ?, hire_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.position)
        .bind(employee.hire_date)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}

/// Translate a driver error, recognising MySQL duplicate-key failures (1062).
pub fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return StoreError::ConstraintViolation(db_err.message().to_string());
        }
        if let Some(code) = db_err.code() {
            if code == "1062" || code == "23000" {
                return StoreError::ConstraintViolation(db_err.message().to_string());
            }
        }
        if db_err.message().to_lowercase().contains("duplicate") {
            return StoreError::ConstraintViolation(db_err.message().to_string());
        }
    }
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn save(&self, mut employee: Employee) -> Result<Employee, StoreError> {
        let id = match employee.id {
            Some(id) => {
                self.update(id, &employee).await?;
                id
            }
            None => self.insert(&employee).await?,
        };
        employee.id = Some(id);
        Ok(employee)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, first_name, last_name, email, position, hire_date
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, first_name, last_name, email, position, hire_date
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn delete(&self, employee: &Employee) -> Result<(), StoreError> {
        let Some(id) = employee.id else {
            return Ok(());
        };
        sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}
