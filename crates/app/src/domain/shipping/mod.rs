//! Shipping settings

pub mod errors;
pub mod service;

pub use errors::ShippingServiceError;
pub use service::*;
