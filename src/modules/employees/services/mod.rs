pub mod employee_service;
pub mod employee_views;

pub use employee_service::EmployeeService;
