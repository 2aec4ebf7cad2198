//! Storefront orchestration: collaborator services, the owned session store
//! and the checkout flow over the `vitrine` engine.

pub mod api;
pub mod checkout;
pub mod config;
pub mod context;
pub mod domain;
pub mod latest;
pub mod session;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::{AddressTag, AddressUuid, OrderTag, OrderUuid, TypedUuid};
