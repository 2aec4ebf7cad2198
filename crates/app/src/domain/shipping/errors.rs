//! Shipping settings service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Errors from the shipping-setting fetch.
#[derive(Debug, Error)]
pub enum ShippingServiceError {
    /// The backend call failed. Consumers fall back to
    /// [`vitrine::checkout::ShippingPolicy::FALLBACK`] — that fallback is
    /// policy, not an error recovery hack.
    #[error("shipping settings fetch failed")]
    Api(#[from] ApiError),
}
