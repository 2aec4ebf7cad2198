//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use vitrine::{checkout::ShippingPolicy, pricing::TaxRate};

use crate::{
    api::{ApiClient, ApiError},
    checkout::CheckoutFlow,
    config::AppConfig,
    domain::{
        addresses::{AddressesService, HttpAddressesService},
        coupons::{CouponsService, HttpCouponsService},
        orders::{HttpOrdersService, OrdersService},
        products::{HttpProductsService, ProductsService},
        shipping::{HttpShippingService, ShippingSettingsService},
    },
};

/// Errors building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The HTTP client could not be constructed.
    #[error("failed to build api client")]
    Api(#[source] ApiError),
}

/// The wired collaborator services plus pricing configuration.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub addresses: Arc<dyn AddressesService>,
    pub coupons: Arc<dyn CouponsService>,
    pub shipping: Arc<dyn ShippingSettingsService>,
    pub orders: Arc<dyn OrdersService>,
    pub tax_rate: TaxRate,
}

impl AppContext {
    /// Build the context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let api = ApiClient::new(config.api()).map_err(AppInitError::Api)?;

        Ok(Self {
            products: Arc::new(HttpProductsService::new(api.clone())),
            addresses: Arc::new(HttpAddressesService::new(api.clone())),
            coupons: Arc::new(HttpCouponsService::new(api.clone())),
            shipping: Arc::new(HttpShippingService::new(api.clone())),
            orders: Arc::new(HttpOrdersService::new(api)),
            tax_rate: config.tax_rate(),
        })
    }

    /// The current shipping policy, falling back to the documented default
    /// when the fetch fails so totals remain computable offline.
    pub async fn shipping_policy(&self) -> ShippingPolicy {
        match self.shipping.get_policy().await {
            Ok(policy) => policy,
            Err(error) => {
                warn!(%error, "shipping settings unavailable, using fallback policy");
                ShippingPolicy::FALLBACK
            }
        }
    }

    /// Start a checkout flow with the given shipping policy.
    pub fn checkout_flow(&self, shipping: ShippingPolicy) -> CheckoutFlow {
        CheckoutFlow::new(
            Arc::clone(&self.coupons),
            Arc::clone(&self.orders),
            shipping,
            self.tax_rate,
        )
    }
}
