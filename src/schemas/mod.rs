pub mod employee_schema;
