pub mod employee;
pub mod envelope;

pub use employee::{CreateEmployeeRequest, CreatedEmployeePayload, DeleteEmployeeRequest, Employee};
pub use envelope::{EnvelopeStatus, UpstreamEnvelope};
