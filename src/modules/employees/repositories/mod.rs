pub mod employee_repository;
pub mod http_employee_repository;


pub use employee_repository::EmployeeRepository;
pub use http_employee_repository::HttpEmployeeRepository;
