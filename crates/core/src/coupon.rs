//! Coupons
//!
//! Coupon validity is decided externally; the engine only models the code and
//! the server-confirmed discount it applies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from coupon code parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CouponError {
    /// The code was empty after trimming.
    #[error("coupon code is empty")]
    EmptyCode,
}

/// A normalised coupon code: trimmed and uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponCode(String);

impl CouponCode {
    /// Parse user input into a code.
    ///
    /// # Errors
    ///
    /// Returns [`CouponError::EmptyCode`] when the input is blank.
    pub fn parse(input: &str) -> Result<Self, CouponError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(CouponError::EmptyCode);
        }

        Ok(Self(trimmed.to_uppercase()))
    }

    /// The normalised code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How a coupon's value is interpreted by the issuing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// A percentage of the order amount.
    Percent,

    /// A fixed amount in minor units.
    Fixed,
}

/// A coupon as described by the backend. Kept for display only; the engine
/// never recomputes the discount from these fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// The coupon code.
    pub code: CouponCode,

    /// How `value` is interpreted.
    pub kind: DiscountKind,

    /// Percentage or fixed amount, per `kind`.
    pub value: u64,

    /// Minimum order amount for eligibility, when set.
    #[serde(default)]
    pub min_order_amount: Option<u64>,

    /// Cap on the computed discount, when set.
    #[serde(default)]
    pub max_discount: Option<u64>,

    /// Remaining uses, when limited.
    #[serde(default)]
    pub usage_limit: Option<u32>,
}

/// A server-validated coupon as held by the checkout: the code plus the
/// discount amount the backend confirmed for the current order amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedCoupon {
    /// The validated code.
    pub code: CouponCode,

    /// Server-confirmed discount in minor units, trusted verbatim until the
    /// totals clamp.
    pub discount_amount: u64,
}
