//! Pricing
//!
//! Unit price selection, discount badges, line totals and tax. Every price
//! shown anywhere derives from these functions so totals never diverge.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::product::Variant;

/// The display price pair for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePair {
    /// The price to charge and display, in minor units.
    pub price: u64,

    /// The strike-through price. Equal to `price` when no genuine sale.
    pub original: u64,
}

/// The unit display price for a variant: the sale price iff it is positive
/// and strictly below base, else the base price.
pub fn unit_price(variant: &Variant) -> u64 {
    match variant.sale_price {
        Some(sale) if sale > 0 && sale < variant.base_price => sale,
        _ => variant.base_price,
    }
}

/// The display price pair for a variant. `original` only exceeds `price`
/// when the sale genuinely undercuts the base.
pub fn price_pair(variant: &Variant) -> PricePair {
    let price = unit_price(variant);

    PricePair {
        price,
        original: variant.base_price.max(price),
    }
}

/// Discount badge percentage, `round(100 - price / original * 100)`.
///
/// Only produced when `original > price`; a "-0%" badge is never shown.
pub fn discount_percent(price: u64, original: u64) -> Option<u8> {
    if original <= price || original == 0 {
        return None;
    }

    let ratio = Decimal::from(price) / Decimal::from(original);
    let percent = (Decimal::ONE_HUNDRED - ratio * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    percent.to_u8().filter(|&p| p > 0)
}

/// A line total: snapshot unit price times quantity, saturating.
pub fn line_total(unit_price: u64, quantity: u32) -> u64 {
    unit_price.saturating_mul(u64::from(quantity))
}

/// A tax rate expressed in basis points (500 = 5%).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Zero tax.
    pub const ZERO: Self = Self(0);

    /// Build a rate from basis points.
    pub const fn from_basis_points(bps: u32) -> Self {
        Self(bps)
    }

    /// The rate in basis points.
    pub const fn basis_points(self) -> u32 {
        self.0
    }

    /// Tax on `amount`, rounded midpoint-away-from-zero to minor units.
    pub fn amount(self, amount: u64) -> u64 {
        let tax = Decimal::from(amount) * Decimal::from(self.0) / Decimal::from(10_000_u32);

        tax.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .unwrap_or(0)
    }
}
