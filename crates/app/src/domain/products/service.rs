//! Products service.

use async_trait::async_trait;
use mockall::automock;

use vitrine::{
    catalog::{self, RawProduct},
    product::ProductDetail,
};

use crate::{api::ApiClient, domain::products::errors::ProductsServiceError};

/// Fetches product detail from the backend and normalises it through the
/// engine's catalog path, so every caller sees the same derived prices and
/// options.
#[derive(Debug, Clone)]
pub struct HttpProductsService {
    api: ApiClient,
}

impl HttpProductsService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    async fn get_product(&self, id_or_slug: &str) -> Result<ProductDetail, ProductsServiceError> {
        let raw: RawProduct = self.api.get(&format!("products/{id_or_slug}")).await?;

        Ok(catalog::normalize(raw))
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Fetch a product by id or slug and normalise it.
    async fn get_product(&self, id_or_slug: &str) -> Result<ProductDetail, ProductsServiceError>;
}
