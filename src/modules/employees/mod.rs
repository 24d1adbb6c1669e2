pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::Employee;
pub use repositories::{EmployeeRepository, HttpEmployeeRepository};
pub use services::EmployeeService;
