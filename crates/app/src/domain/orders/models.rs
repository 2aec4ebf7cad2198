//! Order Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use vitrine::{
    cart::CartLine,
    coupon::CouponCode,
    pricing,
    product::{ColorId, ProductId, SizeId},
};

use crate::{domain::addresses::models::Address, uuids::OrderUuid};

/// One line of an order draft: the snapshot data the backend needs to echo
/// the purchase back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Product identifier.
    pub product_id: ProductId,

    /// Product display name at order time.
    pub product_name: String,

    /// Selected colour, if any.
    #[serde(default)]
    pub color_id: Option<ColorId>,

    /// Selected size, if any.
    #[serde(default)]
    pub size_id: Option<SizeId>,

    /// Units ordered.
    pub quantity: u32,

    /// Snapshot unit price in minor units.
    pub unit_price: u64,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id,
            product_name: line.product.name.clone(),
            color_id: line.selection.color,
            size_id: line.selection.size,
            quantity: line.quantity.get(),
            unit_price: line.product.price,
        }
    }
}

impl OrderLine {
    /// This line's total in minor units.
    pub fn total(&self) -> u64 {
        pricing::line_total(self.unit_price, self.quantity)
    }
}

/// Totals as submitted with a draft and echoed back on the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Sum of line totals.
    pub subtotal: u64,

    /// Shipping fee charged.
    pub shipping_fee: u64,

    /// Tax charged.
    pub taxes: u64,

    /// Coupon discount applied.
    pub discount: u64,

    /// Amount payable.
    pub total: u64,
}

/// The draft submitted to order creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Client-generated idempotency reference for this submission.
    pub client_reference: OrderUuid,

    /// The lines being purchased.
    pub items: Vec<OrderLine>,

    /// Where to ship.
    pub address: Address,

    /// The totals the shopper confirmed.
    pub totals: OrderTotals,

    /// Applied coupon code, if any.
    pub coupon_code: Option<CouponCode>,
}

/// Server-reported order state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Accepted, awaiting fulfilment.
    Pending,

    /// Paid and confirmed.
    Confirmed,

    /// Handed to the carrier.
    Shipped,

    /// Delivered to the shopper.
    Delivered,

    /// Cancelled.
    Cancelled,
}

/// A created order as returned by the backend: a server-issued id and status
/// plus an echo of what was submitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-issued identifier.
    pub id: OrderUuid,

    /// Current status.
    pub status: OrderStatus,

    /// When the order was placed.
    pub placed_at: Timestamp,

    /// Echoed lines.
    pub items: Vec<OrderLine>,

    /// Echoed shipping address.
    pub address: Address,

    /// Echoed totals.
    pub totals: OrderTotals,
}
