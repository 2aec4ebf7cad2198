//! Coupons service.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

use vitrine::coupon::{CouponCode, DiscountKind};

use crate::{api::ApiClient, domain::coupons::errors::CouponsServiceError};

/// A server-confirmed validation result. The discount amount is authoritative
/// for the order amount it was requested with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponValidation {
    /// The validated code.
    pub code: CouponCode,

    /// Discount in minor units for the submitted order amount.
    pub discount_amount: u64,

    /// How the backend derived the amount, when reported.
    #[serde(default)]
    pub kind: Option<DiscountKind>,

    /// Human-readable note, when the backend sends one.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateRequest<'a> {
    code: &'a CouponCode,
    order_amount: u64,
}

/// Coupon validation backed by the backend API.
#[derive(Debug, Clone)]
pub struct HttpCouponsService {
    api: ApiClient,
}

impl HttpCouponsService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CouponsService for HttpCouponsService {
    async fn validate(
        &self,
        code: &CouponCode,
        order_amount: u64,
    ) -> Result<CouponValidation, CouponsServiceError> {
        let request = ValidateRequest { code, order_amount };

        Ok(self.api.post("coupons/validate", &request).await?)
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Ask the backend whether `code` applies to an order of `order_amount`,
    /// and for how much. Rejection surfaces as an error, never as a silent
    /// zero discount.
    async fn validate(
        &self,
        code: &CouponCode,
        order_amount: u64,
    ) -> Result<CouponValidation, CouponsServiceError>;
}
