//! Resolver error mapping.
//!
//! Every failure becomes a GraphQL error whose `extensions.code` is
//! `NOT_FOUND` or `INTERNAL_ERROR`. The message keeps the cause.

use crate::application::error::ApplicationError;
use async_graphql::{Error, ErrorExtensions};
use tracing::{error, warn};

/// `extensions.code` for a missing record.
pub const NOT_FOUND: &str = "NOT_FOUND";
/// `extensions.code` for every other failure.
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

/// Builds the error for a failed resolver.
///
/// `action` completes "Error while ...", e.g. `"deleting supplier"`.
pub fn resolver_error(action: &str, err: ApplicationError) -> Error {
    let code = if err.is_not_found() {
        warn!("Error while {}: {}", action, err);
        NOT_FOUND
    } else {
        error!("Error while {}: {}", action, err);
        INTERNAL_ERROR
    };

    Error::new(format!("Error while {action}: {err}")).extend_with(|_, e| e.set("code", code))
}
