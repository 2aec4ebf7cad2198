//! Vitrine
//!
//! Vitrine is a storefront cart and checkout engine: variant catalog
//! normalisation, selection-to-variant resolution, authoritative pricing and
//! checkout totals over sparse colour/size/stock dimensions.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod coupon;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod product;
pub mod resolver;
pub mod wishlist;
