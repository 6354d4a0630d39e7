//! # gRPC Status Mapping
//!
//! Conversions from the failure taxonomy to gRPC status codes, used by the
//! entity services.

use crate::application::error::ApplicationError;
use crate::proto::{FAILURE_KIND_METADATA, STORE_FAILURE};
use tonic::metadata::{MetadataMap, MetadataValue};
use tonic::{Code, Status};

fn store_failure(message: String) -> Status {
    let mut metadata = MetadataMap::new();
    metadata.insert(FAILURE_KIND_METADATA, MetadataValue::from_static(STORE_FAILURE));
    Status::with_metadata(Code::Internal, message, metadata)
}

/// Converts an ApplicationError to a gRPC Status.
///
/// Validation and store messages are sent without their local prefix so the
/// receiving side can rebuild the same error. Store failures are tagged in
/// the status metadata to tell them apart from other `Internal` statuses.
impl From<ApplicationError> for Status {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(message) => Status::invalid_argument(message),
            ApplicationError::NotFound { .. } => Status::not_found(err.to_string()),
            ApplicationError::Store(message) => store_failure(message),
            ApplicationError::Upstream(_) => Status::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::EntityKind;

    #[test]
    fn application_errors_map_to_codes() {
        let status = Status::from(ApplicationError::validation("name is required"));
        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(status.message(), "name is required");

        let status = Status::from(ApplicationError::not_found(EntityKind::Supplier, "x"));
        assert_eq!(status.code(), Code::NotFound);
        assert_eq!(status.message(), "Supplier not found");

        let status = Status::from(ApplicationError::store("connection refused"));
        assert_eq!(status.code(), Code::Internal);
        assert_eq!(status.message(), "connection refused");
        assert_eq!(
            status
                .metadata()
                .get(FAILURE_KIND_METADATA)
                .unwrap()
                .to_str()
                .unwrap(),
            STORE_FAILURE
        );

        let status = Status::from(ApplicationError::upstream("bad gateway"));
        assert_eq!(status.code(), Code::Internal);
        assert!(status.metadata().get(FAILURE_KIND_METADATA).is_none());
    }
}
