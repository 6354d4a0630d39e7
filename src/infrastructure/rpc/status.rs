//! Decoding gRPC failures back into [`ApplicationError`].

use crate::application::error::ApplicationError;
use crate::domain::entities::EntityKind;
use crate::proto::{ConversionError, FAILURE_KIND_METADATA, STORE_FAILURE};
use tonic::{Code, Status};
use tracing::error;

fn is_store_failure(status: &Status) -> bool {
    status
        .metadata()
        .get(FAILURE_KIND_METADATA)
        .and_then(|value| value.to_str().ok())
        == Some(STORE_FAILURE)
}

/// Maps a status returned by the `kind` microservice.
///
/// `id` is the id the call was about, if any. Only `Internal` statuses
/// tagged by the service as store failures become store errors.
pub(crate) fn from_status(kind: EntityKind, id: &str, status: Status) -> ApplicationError {
    match status.code() {
        Code::NotFound => ApplicationError::not_found(kind, id),
        Code::InvalidArgument => ApplicationError::validation(status.message()),
        Code::Internal if is_store_failure(&status) => ApplicationError::store(status.message()),
        code => {
            error!("{} service call failed: {:?} {}", kind, code, status.message());
            ApplicationError::upstream(format!("{}: {}", code, status.message()))
        }
    }
}

/// Maps a response the gateway could not decode.
pub(crate) fn from_conversion(kind: EntityKind, err: ConversionError) -> ApplicationError {
    error!("Invalid {} from service: {}", kind.singular(), err);
    ApplicationError::upstream(format!("invalid {} from service: {err}", kind.singular()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_entity() {
        let err = from_status(EntityKind::Product, "p1", Status::not_found("Product not found"));
        assert_eq!(err, ApplicationError::not_found(EntityKind::Product, "p1"));
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn invalid_argument_is_validation() {
        let err = from_status(
            EntityKind::Supplier,
            "",
            Status::invalid_argument("name is required"),
        );
        assert_eq!(err, ApplicationError::validation("name is required"));
    }

    #[test]
    fn tagged_internal_is_store() {
        let mut metadata = tonic::metadata::MetadataMap::new();
        metadata.insert(
            FAILURE_KIND_METADATA,
            tonic::metadata::MetadataValue::from_static(STORE_FAILURE),
        );
        let status = Status::with_metadata(Code::Internal, "connection refused", metadata);
        let err = from_status(EntityKind::Supplier, "", status);
        assert_eq!(err, ApplicationError::store("connection refused"));
    }

    #[test]
    fn untagged_internal_is_upstream() {
        let err = from_status(
            EntityKind::Supplier,
            "",
            Status::internal("h2 protocol error: stream reset"),
        );
        assert!(matches!(err, ApplicationError::Upstream(_)));
        assert!(err.to_string().contains("h2 protocol error"));
    }

    #[test]
    fn transport_failures_are_upstream() {
        let err = from_status(EntityKind::Supplier, "", Status::unavailable("tcp connect error"));
        assert!(matches!(err, ApplicationError::Upstream(_)));
        assert!(err.to_string().contains("tcp connect error"));
    }

    #[test]
    fn undecodable_response_is_upstream() {
        let err = from_conversion(EntityKind::Product, ConversionError::MissingField("product"));
        assert!(matches!(err, ApplicationError::Upstream(_)));
    }
}
