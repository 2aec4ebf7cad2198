//! Typed Uuids

use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A [`Uuid`] branded with the entity it identifies, so an address id can
/// never be passed where an order id is expected.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypedUuid<T>(Uuid, #[serde(skip)] PhantomData<T>);

impl<T> TypedUuid<T> {
    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }

    /// Generate a fresh v7 UUID.
    pub fn generate() -> Self {
        Self::from_uuid(Uuid::now_v7())
    }

    /// Unwrap to the raw UUID.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl<T> Clone for TypedUuid<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedUuid<T> {}

impl<T> Debug for TypedUuid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedUuid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedUuid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedUuid<T> {}

impl<T> Hash for TypedUuid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Marker for address identifiers.
#[derive(Debug)]
pub enum AddressTag {}

/// Marker for order identifiers.
#[derive(Debug)]
pub enum OrderTag {}

/// Server-issued address identifier.
pub type AddressUuid = TypedUuid<AddressTag>;

/// Server-issued order identifier.
pub type OrderUuid = TypedUuid<OrderTag>;
