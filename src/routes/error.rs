use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::ledger::LedgerError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Missing required fields: winery_id and winery_profile")]
    MissingFields,

    #[error("Failed to save {entity}")]
    Persistence {
        entity: &'static str,
        #[source]
        source: LedgerError,
    },

    #[error("An unexpected error occurred")]
    Unexpected,
}

impl ApiError {
    pub fn persisting(entity: &'static str) -> impl FnOnce(LedgerError) -> Self {
        move |source| Self::Persistence { entity, source }
    }

    const fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidPayload(_) => (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD"),
            Self::MissingFields => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::Persistence { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            Self::Unexpected => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    code: &'static str,
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, code, "Request failed");
        } else {
            tracing::warn!(error = %self, code, "Request rejected");
        }

        let details = match &self {
            Self::Persistence { source, .. } => Some(source.to_string()),
            _ => None,
        };
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
            code,
            details,
        };
        (status, Json(body)).into_response()
    }
}

/// Turns a handler panic into the generic 500 envelope.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "Handler panicked");
    ApiError::Unexpected.into_response()
}
