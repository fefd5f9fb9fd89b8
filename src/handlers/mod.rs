pub mod employee_handler;
pub mod health_handler;
