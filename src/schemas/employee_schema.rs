use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::employee::Employee;
use crate::utils::validation::validate_employee;

// Request and response body for every employee endpoint.
//
// `id` is ignored on create and always present (possibly null) in responses.
// On PATCH a missing or null field means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSchema {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub hire_date: Option<NaiveDate>,
}

impl Validate for EmployeeSchema {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_employee(self, chrono::Local::now().date_naive())
    }
}

impl From<EmployeeSchema> for Employee {
    fn from(schema: EmployeeSchema) -> Self {
        Employee {
            id: schema.id,
            first_name: schema.first_name,
            last_name: schema.last_name,
            email: schema.email,
            position: schema.position,
            hire_date: schema.hire_date,
        }
    }
}

impl From<Employee> for EmployeeSchema {
    fn from(employee: Employee) -> Self {
        EmployeeSchema {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            position: employee.position,
            hire_date: employee.hire_date,
        }
    }
}
