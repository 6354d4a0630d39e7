//! Lazily connected gRPC channels.

use crate::application::error::{ApplicationError, ApplicationResult};
use tonic::transport::{Channel, Endpoint};

/// Builds a channel to `endpoint` without connecting.
///
/// The connection is established on the first call and re-established after
/// failures, so the gateway can start before the microservices do.
///
/// # Errors
///
/// Returns [`ApplicationError::Upstream`] if `endpoint` is not a valid URI.
pub fn lazy_channel(endpoint: &str) -> ApplicationResult<Channel> {
    let endpoint = Endpoint::from_shared(endpoint.to_string())
        .map_err(|e| ApplicationError::upstream(format!("invalid endpoint {endpoint}: {e}")))?;
    Ok(endpoint.connect_lazy())
}
