//! Orders service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::ApiClient,
    domain::orders::{
        errors::OrdersServiceError,
        models::{Order, OrderDraft},
    },
    uuids::OrderUuid,
};

/// Order creation backed by the backend API.
#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    api: ApiClient,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrdersServiceError> {
        Ok(self.api.post("orders", &draft).await?)
    }

    async fn get_order(&self, id: OrderUuid) -> Result<Order, OrdersServiceError> {
        Ok(self.api.get(&format!("orders/{id}")).await?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Submit an order draft. The backend issues the order id and status.
    async fn create_order(&self, draft: OrderDraft) -> Result<Order, OrdersServiceError>;

    /// Fetch an order, e.g. for the confirmation view.
    async fn get_order(&self, id: OrderUuid) -> Result<Order, OrdersServiceError>;
}
