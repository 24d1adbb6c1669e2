use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::core::{AppError, Result};
use crate::modules::employees::models::{
    CreateEmployeeRequest, CreatedEmployeePayload, DeleteEmployeeRequest, Employee,
    UpstreamEnvelope,
};

use super::employee_repository::EmployeeRepository;

/// Employee repository backed by the upstream HTTP API
pub struct HttpEmployeeRepository {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeRepository {
    pub fn new(client: Client, config: &UpstreamConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::Configuration(format!("Invalid upstream base URL: {}", e))
        })?;

        Ok(Self { client, base_url })
    }

    /// `{base}/{id}` with the id percent-encoded as a single path segment
    fn employee_url(&self, id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration("Upstream base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<UpstreamEnvelope<T>> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        UpstreamEnvelope::from_body(&body)
    }
}

#[async_trait]
impl EmployeeRepository for HttpEmployeeRepository {
    async fn fetch_all(&self) -> Result<UpstreamEnvelope<Vec<Employee>>> {
        let response = self.client.get(self.base_url.clone()).send().await?;
        Self::read_envelope(response).await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<UpstreamEnvelope<Employee>> {
        let response = self.client.get(self.employee_url(id)?).send().await?;
        Self::read_envelope(response).await
    }

    async fn create(
        &self,
        request: &CreateEmployeeRequest,
    ) -> Result<UpstreamEnvelope<CreatedEmployeePayload>> {
        let response = self
            .client
            .post(self.base_url.clone())
            .json(request)
            .send()
            .await?;
        Self::read_envelope(response).await
    }

    async fn delete_by_name(&self, name: &str) -> Result<UpstreamEnvelope<bool>> {
        let body = DeleteEmployeeRequest {
            name: name.to_string(),
        };
        let response = self
            .client
            .delete(self.base_url.clone())
            .json(&body)
            .send()
            .await?;
        Self::read_envelope(response).await
    }
}
