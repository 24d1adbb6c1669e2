use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::core::error::AppError;

/// Turn a client body that fails to decode into the uniform bare 500
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "Rejected request body"
    );

    AppError::invalid_request(err.to_string()).into()
}
