// src/presentation/http/error.rs
use crate::application::error::ApplicationError;
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error response for console routes that fail outside the editor flow:
/// malformed ids or forms, bad uploads, and backend trouble.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "invalid_request", msg)
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(&domain_err),
            ApplicationError::Unauthorized(msg) => {
                Self::new(StatusCode::UNAUTHORIZED, "unauthorized", msg)
            }
            err @ ApplicationError::Rejected { .. } => {
                let message = err
                    .server_message()
                    .map_or_else(|| err.to_string(), str::to_string);
                Self::new(StatusCode::BAD_GATEWAY, "backend_rejected", message)
            }
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "console request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
        }
    }

    fn from_domain(err: &DomainError) -> Self {
        let (status, code) = match err {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            DomainError::FileTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, "file_too_large"),
            DomainError::UnsupportedFileType(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_file_type")
            }
        };
        Self::new(status, code, err.to_string())
    }

    fn new(status: StatusCode, code: &'static str, message: String) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self::from_domain(&err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self.status.canonical_reason().unwrap_or("error"),
            code: self.code,
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    code: &'static str,
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;
