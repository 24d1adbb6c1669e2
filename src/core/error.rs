use actix_web::{body::BoxBody, error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every variant reaching a handler collapses to the same client-visible
/// outcome: `500 Internal Server Error` with no body.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration errors (startup only)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport failure talking to the upstream service
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    /// Upstream answered with an empty body or a JSON `null`
    #[error("Upstream response carried no envelope")]
    MissingEnvelope,

    /// Envelope present but its `data` field is null or absent
    #[error("Upstream envelope carried no payload")]
    MissingPayload,

    /// Envelope or payload did not have the expected shape
    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    /// Upstream processed the call but reported a negative outcome
    #[error("Upstream rejected request: {0}")]
    Rejected(String),

    /// Client request body could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).finish()
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedPayload(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        AppError::Rejected(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        AppError::InvalidRequest(msg.into())
    }
}
