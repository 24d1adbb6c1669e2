use async_trait::async_trait;

use crate::core::Result;
use crate::modules::employees::models::{
    CreateEmployeeRequest, CreatedEmployeePayload, Employee, UpstreamEnvelope,
};

/// Source of employee records
///
/// Implementations return the upstream envelope untouched; deciding whether
/// a payload is acceptable is the service's job. Transport problems and
/// undecodable bodies surface as errors.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// GET the full employee list
    async fn fetch_all(&self) -> Result<UpstreamEnvelope<Vec<Employee>>>;

    /// GET a single employee
    async fn fetch_by_id(&self, id: &str) -> Result<UpstreamEnvelope<Employee>>;

    /// POST a new employee
    async fn create(
        &self,
        request: &CreateEmployeeRequest,
    ) -> Result<UpstreamEnvelope<CreatedEmployeePayload>>;

    /// DELETE an employee by name
    async fn delete_by_name(&self, name: &str) -> Result<UpstreamEnvelope<bool>>;
}
