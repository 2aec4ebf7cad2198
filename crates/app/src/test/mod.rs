//! Shared helpers for service-level tests.

mod context;

pub use context::{TestContext, home_address};
