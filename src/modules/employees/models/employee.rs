use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Employee record as served by the upstream API
///
/// Field names on the wire carry the upstream's `employee_` prefix, and the
/// same shape is returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,

    #[serde(rename = "employee_name")]
    pub name: String,

    #[serde(rename = "employee_salary")]
    pub salary: u32,

    #[serde(rename = "employee_age")]
    pub age: u32,

    #[serde(rename = "employee_title")]
    pub title: String,

    #[serde(rename = "employee_email")]
    pub email: String,
}

/// Request body for POST /api/v1/employee, forwarded upstream as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub salary: u32,
    pub age: u32,
    pub title: String,
}

/// Upstream deletes by name, not by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmployeeRequest {
    pub name: String,
}

/// Payload of the upstream create response
///
/// Every field is optional on the wire; conversion into [`Employee`] fails
/// on the first one that is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEmployeePayload {
    pub id: Option<String>,
    pub employee_name: Option<String>,
    pub employee_salary: Option<u32>,
    pub employee_age: Option<u32>,
    pub employee_title: Option<String>,
    pub employee_email: Option<String>,
}

impl TryFrom<CreatedEmployeePayload> for Employee {
    type Error = AppError;

    fn try_from(payload: CreatedEmployeePayload) -> Result<Self> {
        let raw_id = required(payload.id, "id")?;
        let id = Uuid::parse_str(&raw_id).map_err(|e| {
            AppError::malformed(format!("created employee id {:?} is not a UUID: {}", raw_id, e))
        })?;

        Ok(Employee {
            id,
            name: required(payload.employee_name, "employee_name")?,
            salary: required(payload.employee_salary, "employee_salary")?,
            age: required(payload.employee_age, "employee_age")?,
            title: required(payload.employee_title, "employee_title")?,
            email: required(payload.employee_email, "employee_email")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| AppError::malformed(format!("created employee is missing {}", field)))
}
