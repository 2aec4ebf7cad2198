//! Products service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors from product fetches.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// The id or slug does not resolve to a product. Redirect-worthy, never
    /// swallowed.
    #[error("product not found")]
    NotFound,

    /// The backend call failed.
    #[error("product fetch failed")]
    Api(#[source] ApiError),
}

impl From<ApiError> for ProductsServiceError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::NotFound => Self::NotFound,
            other => Self::Api(other),
        }
    }
}
