//! REST error responses.
//!
//! Failures are answered with a plain-text body: `404` carrying the
//! not-found message, `500` carrying `"Error <action>: <cause>"` for
//! everything else.

use crate::application::error::ApplicationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

/// A failed REST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestError {
    status: StatusCode,
    message: String,
}

impl RestError {
    /// Maps a failed operation.
    ///
    /// `action` completes "Error ...", e.g. `"fetching suppliers"`.
    #[must_use]
    pub fn from_failure(action: &str, err: ApplicationError) -> Self {
        if err.is_not_found() {
            warn!("{}", err);
            return Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            };
        }
        Self::internal(action, &err)
    }

    /// A `500` for `action` with the given cause.
    #[must_use]
    pub fn internal(action: &str, cause: &dyn std::fmt::Display) -> Self {
        error!("Error {}: {}", action, cause);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Error {action}: {cause}"),
        }
    }

    /// Returns the HTTP status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}
