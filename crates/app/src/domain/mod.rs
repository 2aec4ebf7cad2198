//! Storefront domain concerns: the collaborator services the engine consumes.

pub mod addresses;
pub mod coupons;
pub mod orders;
pub mod products;
pub mod shipping;
