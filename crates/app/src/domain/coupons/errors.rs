//! Coupons service errors.

use thiserror::Error;

use vitrine::coupon::CouponError;

use crate::api::ApiError;

/// Errors from coupon validation.
#[derive(Debug, Error)]
pub enum CouponsServiceError {
    /// The code is malformed before any round trip.
    #[error(transparent)]
    Code(#[from] CouponError),

    /// The backend rejected the code (invalid, expired or ineligible), with
    /// its message. Never silently mapped to a zero discount.
    #[error("coupon rejected: {0}")]
    Rejected(String),

    /// The backend call failed.
    #[error("coupon validation failed")]
    Api(#[source] ApiError),
}

impl From<ApiError> for CouponsServiceError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Rejected(message) => Self::Rejected(message),
            ApiError::NotFound => Self::Rejected("unknown coupon code".to_string()),
            other => Self::Api(other),
        }
    }
}
