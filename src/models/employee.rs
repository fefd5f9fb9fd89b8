use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored employee row.
///
/// Columns other than `id` are nullable: a full update writes whatever the caller
/// sent, and a record that has not been saved yet carries no `id`.
#[derive(sqlx::FromRow, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub hire_date: Option<NaiveDate>,
}
