//! Wishlist
//!
//! An identifier-only twin of the cart. Independent of the cart: a product
//! may sit in both at once.

use rustc_hash::FxHashSet;

use crate::product::ProductId;

/// The shopper's wishlist, insertion-ordered.
#[derive(Debug, Default)]
pub struct Wishlist {
    order: Vec<ProductId>,
    members: FxHashSet<ProductId>,
}

impl Wishlist {
    /// An empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// The wishlisted product ids, in insertion order.
    pub fn items(&self) -> &[ProductId] {
        &self.order
    }

    /// Whether the product is wishlisted.
    pub fn contains(&self, id: ProductId) -> bool {
        self.members.contains(&id)
    }

    /// Number of wishlisted products.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Add a product. Returns false when it was already present.
    pub fn add(&mut self, id: ProductId) -> bool {
        if !self.members.insert(id) {
            return false;
        }

        self.order.push(id);
        true
    }

    /// Remove a product. Returns false when it was not present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        if !self.members.remove(&id) {
            return false;
        }

        self.order.retain(|&p| p != id);
        true
    }

    /// Add the product if absent, remove it if present. Returns whether it is
    /// present afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.add(id) {
            true
        } else {
            self.remove(id);
            false
        }
    }
}
