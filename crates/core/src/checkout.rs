//! Checkout totals
//!
//! Combines the cart subtotal, a shipping-fee-threshold rule, tax and an
//! externally validated coupon discount into the payable total.

use serde::Deserialize;

use crate::pricing::TaxRate;

/// The shop's shipping rule: a flat fee, waived at or above a subtotal
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPolicy {
    /// Subtotal, in minor units, at which shipping becomes free.
    pub free_shipping_threshold: u64,

    /// Flat fee below the threshold.
    pub shipping_fee: u64,
}

impl ShippingPolicy {
    /// The documented policy used when the shipping-setting fetch fails, so
    /// totals remain computable offline.
    pub const FALLBACK: Self = Self {
        free_shipping_threshold: 1999,
        shipping_fee: 0,
    };

    /// The fee for a given subtotal. An empty cart ships nothing and pays
    /// nothing.
    pub fn fee_for(&self, subtotal: u64) -> u64 {
        if subtotal == 0 || subtotal >= self.free_shipping_threshold {
            0
        } else {
            self.shipping_fee
        }
    }
}

/// The checkout summary. Recomputed from cart and coupon state on demand,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutTotals {
    /// Sum of line price times quantity.
    pub subtotal: u64,

    /// Shipping fee after the threshold rule.
    pub shipping_fee: u64,

    /// Tax on the subtotal.
    pub taxes: u64,

    /// Applied coupon discount, already clamped.
    pub discount: u64,

    /// `subtotal + shipping_fee + taxes - discount`.
    pub total: u64,
}

/// Compute checkout totals.
///
/// The discount comes from an external validation call and is trusted
/// verbatim, except that it is clamped to `subtotal + shipping_fee` so the
/// total can never go negative.
pub fn compute_totals(
    subtotal: u64,
    policy: ShippingPolicy,
    tax_rate: TaxRate,
    discount: u64,
) -> CheckoutTotals {
    let shipping_fee = policy.fee_for(subtotal);
    let taxes = tax_rate.amount(subtotal);
    let discount = discount.min(subtotal.saturating_add(shipping_fee));

    CheckoutTotals {
        subtotal,
        shipping_fee,
        taxes,
        discount,
        total: subtotal
            .saturating_add(shipping_fee)
            .saturating_add(taxes)
            .saturating_sub(discount),
    }
}
