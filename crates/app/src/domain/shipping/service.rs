//! Shipping settings service.

use async_trait::async_trait;
use mockall::automock;

use vitrine::checkout::ShippingPolicy;

use crate::{api::ApiClient, domain::shipping::errors::ShippingServiceError};

/// Shipping settings backed by the backend API.
#[derive(Debug, Clone)]
pub struct HttpShippingService {
    api: ApiClient,
}

impl HttpShippingService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ShippingSettingsService for HttpShippingService {
    async fn get_policy(&self) -> Result<ShippingPolicy, ShippingServiceError> {
        Ok(self.api.get("settings/shipping").await?)
    }
}

#[automock]
#[async_trait]
pub trait ShippingSettingsService: Send + Sync {
    /// Fetch the current shipping policy.
    async fn get_policy(&self) -> Result<ShippingPolicy, ShippingServiceError>;
}
