use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    message: String,
    details: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: details.into(),
        }
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl ErrorStatus {
    /*
     * Attachments carry the human-readable reason. Everything below the
     * contexts stays in the log, not on the wire.
     */
    fn details(&self) -> String {
        let attached = self
            .0
            .frames()
            .filter_map(|frame| {
                frame
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| frame.downcast_ref::<&'static str>().copied())
            })
            .collect::<Vec<_>>()
            .join(": ");
        if attached.is_empty() {
            self.0.to_string()
        } else {
            attached
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.current_context() {
            KernelError::NotFound => StatusCode::NOT_FOUND,
            KernelError::Validation => StatusCode::BAD_REQUEST,
            KernelError::Conflict => StatusCode::CONFLICT,
            KernelError::Concurrency => StatusCode::CONFLICT,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{:?}", self.0);
        }
        let body = ErrorResponse::new(self.0.current_context().to_string(), self.details());
        (status, Json(body)).into_response()
    }
}
