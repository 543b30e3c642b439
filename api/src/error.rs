//! Maps every failure to a status code and a JSON [`ErrorBody`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pastry_store::StoreError;
use pastry_types::{Issue, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

const VALIDATION_LABEL: &str = "Validation failed";
const SCHEMA_MISMATCH: &str = "The request body doesn't match the expected schema";
const INTERNAL_NOTE: &str = "Internal server error";
const UNKNOWN_ERROR: &str = "Unknown error";

/// Failures a request can end in.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The payload failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store refused the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The path id is not a valid pastry id, so nothing can match it.
    #[error("Pastry with id: {0} not found.")]
    UnknownId(String),

    /// No route matches the request path.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// The path exists but does not accept this method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// The request body is missing or is not JSON.
    #[error("{0}")]
    BadRequest(String),

    /// Anything unanticipated.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(err) => {
                StatusCode::from_u16(err.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::UnknownId(_) | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Issue>>,
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(err) => Self {
                error: VALIDATION_LABEL.into(),
                message: Some(SCHEMA_MISMATCH.into()),
                details: Some(err.into_issues()),
            },
            ApiError::Internal(msg) => Self {
                error: if msg.is_empty() {
                    UNKNOWN_ERROR.into()
                } else {
                    msg
                },
                message: Some(INTERNAL_NOTE.into()),
                details: None,
            },
            other => Self {
                error: other.to_string(),
                message: None,
                details: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Validation(err) => {
                warn!(%status, issues = ?err.issues(), "request failed validation");
            }
            Self::Internal(_) => error!(%status, error = %self, "request failed"),
            _ => warn!(%status, error = %self, "request failed"),
        }

        (status, Json(ErrorBody::from(self))).into_response()
    }
}
