use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Status text of a successfully handled upstream request
pub const STATUS_HANDLED: &str = "Successfully processed request.";

/// Status text of a failed upstream request
pub const STATUS_ERROR: &str = "Failed to process request.";

/// Status indicator carried by every upstream envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnvelopeStatus {
    Handled,
    Error,
    /// Any other free-form status text
    Other(String),
}

impl From<String> for EnvelopeStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            STATUS_HANDLED => EnvelopeStatus::Handled,
            STATUS_ERROR => EnvelopeStatus::Error,
            _ => EnvelopeStatus::Other(value),
        }
    }
}

impl From<EnvelopeStatus> for String {
    fn from(status: EnvelopeStatus) -> Self {
        match status {
            EnvelopeStatus::Handled => STATUS_HANDLED.to_string(),
            EnvelopeStatus::Error => STATUS_ERROR.to_string(),
            EnvelopeStatus::Other(text) => text,
        }
    }
}

/// Wrapper around every upstream response payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamEnvelope<T> {
    pub data: Option<T>,
    pub status: Option<EnvelopeStatus>,
    pub error: Option<String>,
}

impl<T> UpstreamEnvelope<T> {
    pub fn is_error(&self) -> bool {
        matches!(self.status, Some(EnvelopeStatus::Error))
    }

    /// Unwrap the payload, failing when it is null or absent
    pub fn into_payload(self) -> Result<T> {
        self.data.ok_or(AppError::MissingPayload)
    }
}

#[cfg(test)]
impl<T> UpstreamEnvelope<T> {
    pub fn handled(data: T) -> Self {
        Self {
            data: Some(data),
            status: Some(EnvelopeStatus::Handled),
            error: None,
        }
    }

    pub fn empty(status: EnvelopeStatus) -> Self {
        Self {
            data: None,
            status: Some(status),
            error: None,
        }
    }
}

impl<T: DeserializeOwned> UpstreamEnvelope<T> {
    /// Decode an envelope from a raw response body
    ///
    /// An empty body or a JSON `null` means there is no envelope at all.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::MissingEnvelope);
        }

        serde_json::from_slice::<Option<Self>>(body)
            .map_err(|e| AppError::malformed(format!("invalid envelope: {}", e)))?
            .ok_or(AppError::MissingEnvelope)
    }
}
