//! Vitrine prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{AddOutcome, Cart, CartError, CartLine, LineId, UpdateOutcome},
    catalog::{RawProduct, normalize},
    checkout::{CheckoutTotals, ShippingPolicy, compute_totals},
    coupon::{AppliedCoupon, Coupon, CouponCode, CouponError, DiscountKind},
    pricing::{PricePair, TaxRate, discount_percent, line_total, price_pair, unit_price},
    product::{
        ColorId, ColorOption, GalleryImage, ProductDetail, ProductId, SizeId, SizeOption, Variant,
        VariantId,
    },
    resolver::{ResolvedVariant, Selection, resolve},
    wishlist::Wishlist,
};
