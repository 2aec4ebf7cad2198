//! Addresses service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::ApiClient,
    domain::addresses::{
        errors::AddressesServiceError,
        models::{Address, NewAddress},
    },
    uuids::AddressUuid,
};

/// Address book backed by the backend API.
#[derive(Debug, Clone)]
pub struct HttpAddressesService {
    api: ApiClient,
}

impl HttpAddressesService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AddressesService for HttpAddressesService {
    async fn list_addresses(&self) -> Result<Vec<Address>, AddressesServiceError> {
        Ok(self.api.get("addresses").await?)
    }

    async fn create_address(&self, address: NewAddress) -> Result<Address, AddressesServiceError> {
        let missing = address.missing_fields();

        if !missing.is_empty() {
            return Err(AddressesServiceError::Incomplete(missing));
        }

        Ok(self.api.post("addresses", &address).await?)
    }

    async fn set_default(&self, id: AddressUuid) -> Result<Address, AddressesServiceError> {
        Ok(self
            .api
            .post(&format!("addresses/{id}/default"), &serde_json::json!({}))
            .await?)
    }
}

#[automock]
#[async_trait]
pub trait AddressesService: Send + Sync {
    /// Retrieve the shopper's addresses.
    async fn list_addresses(&self) -> Result<Vec<Address>, AddressesServiceError>;

    /// Create an address. Incomplete payloads are rejected locally before any
    /// round trip.
    async fn create_address(&self, address: NewAddress) -> Result<Address, AddressesServiceError>;

    /// Mark an address as the shopper's default.
    async fn set_default(&self, id: AddressUuid) -> Result<Address, AddressesServiceError>;
}
