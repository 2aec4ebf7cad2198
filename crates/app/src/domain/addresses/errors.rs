//! Addresses service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors from the address service.
#[derive(Debug, Error)]
pub enum AddressesServiceError {
    /// The address id does not resolve.
    #[error("address not found")]
    NotFound,

    /// The payload is incomplete; the named fields are blank.
    #[error("address is missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    /// The backend rejected the payload with a message.
    #[error("address rejected: {0}")]
    Rejected(String),

    /// The backend call failed.
    #[error("address request failed")]
    Api(#[source] ApiError),
}

impl From<ApiError> for AddressesServiceError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::NotFound => Self::NotFound,
            ApiError::Rejected(message) => Self::Rejected(message),
            other => Self::Api(other),
        }
    }
}
