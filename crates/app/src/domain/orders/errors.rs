//! Orders service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors from order creation and lookup.
#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// The order id does not resolve.
    #[error("order not found")]
    NotFound,

    /// The backend rejected the draft with a message.
    #[error("order rejected: {0}")]
    Rejected(String),

    /// The backend call failed.
    #[error("order request failed")]
    Api(#[source] ApiError),
}

impl From<ApiError> for OrdersServiceError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::NotFound => Self::NotFound,
            ApiError::Rejected(message) => Self::Rejected(message),
            other => Self::Api(other),
        }
    }
}
