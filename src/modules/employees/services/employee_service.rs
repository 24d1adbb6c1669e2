use std::sync::Arc;

use tracing::{error, info};

use crate::core::{AppError, Result};
use crate::modules::employees::models::{CreateEmployeeRequest, Employee};
use crate::modules::employees::repositories::EmployeeRepository;

use super::employee_views::{self, TOP_EARNER_LIMIT};

/// Orchestrates upstream calls and reshapes their results
///
/// Each operation issues its upstream calls sequentially and at most once.
/// Any failure is logged here and handed back as an [`AppError`].
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// All employees in upstream order
    ///
    /// A `null` list payload is a failure, not an empty list.
    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        let employees = self
            .repository
            .fetch_all()
            .await
            .and_then(|envelope| envelope.into_payload())
            .inspect_err(|e| error!(error = %e, "Error fetching employee records"))?;

        info!(count = employees.len(), "Employee records fetched");
        Ok(employees)
    }

    /// Employees whose name contains `fragment`
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Employee>> {
        let employees = self.list_all().await.inspect_err(|_| {
            error!(search = %fragment, "Error fetching employee records by name")
        })?;

        let matches = employee_views::filter_by_name(employees, fragment);
        info!(search = %fragment, count = matches.len(), "Employee records filtered by name");
        Ok(matches)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Employee> {
        let employee = self
            .repository
            .fetch_by_id(id)
            .await
            .and_then(|envelope| envelope.into_payload())
            .inspect_err(|e| error!(employee_id = %id, error = %e, "Error fetching employee record"))?;

        info!(employee_id = %id, "Employee record fetched");
        Ok(employee)
    }

    /// Highest salary, or `-1` when the upstream list is empty
    pub async fn highest_salary(&self) -> Result<i64> {
        let employees = self.list_all().await?;
        let highest = employee_views::highest_salary(&employees);

        info!(highest_salary = highest, "Highest salary computed");
        Ok(highest)
    }

    pub async fn top_earner_names(&self) -> Result<Vec<String>> {
        let employees = self.list_all().await?;
        let names = employee_views::top_earner_names(&employees, TOP_EARNER_LIMIT);

        info!(names = ?names, "Top earning employees computed");
        Ok(names)
    }

    pub async fn create(&self, request: CreateEmployeeRequest) -> Result<Employee> {
        let result: Result<Employee> = async {
            let envelope = self.repository.create(&request).await?;
            if envelope.is_error() {
                return Err(AppError::rejected(
                    envelope
                        .error
                        .unwrap_or_else(|| "upstream reported an error status".to_string()),
                ));
            }
            Employee::try_from(envelope.into_payload()?)
        }
        .await;

        let employee = result
            .inspect_err(|e| error!(name = %request.name, error = %e, "Error creating employee record"))?;

        info!(employee_id = %employee.id, name = %employee.name, "Employee created");
        Ok(employee)
    }

    /// Delete by id, returning the deleted employee's name
    ///
    /// The upstream deletes by name, so the record is looked up first. A
    /// failed lookup aborts before any delete is sent.
    pub async fn delete_by_id(&self, id: &str) -> Result<String> {
        let name = self
            .get_by_id(id)
            .await
            .inspect_err(|_| error!(employee_id = %id, "Error deleting employee record"))?
            .name;

        let deleted = self
            .repository
            .delete_by_name(&name)
            .await
            .and_then(|envelope| envelope.into_payload())
            .and_then(|deleted| {
                if deleted {
                    Ok(())
                } else {
                    Err(AppError::rejected("delete flag was false"))
                }
            });

        deleted.inspect_err(
            |e| error!(employee_id = %id, name = %name, error = %e, "Error deleting employee record"),
        )?;

        info!(employee_id = %id, name = %name, "Employee deleted");
        Ok(name)
    }
}
