//! Session store
//!
//! The explicit owned store injected into whatever serves views: the cart and
//! its wishlist twin, with the engine's operations as the public interface.
//! No ambient singleton; callers hold the `Session` and pass it where it is
//! needed.

use std::num::NonZeroU32;

use tracing::{debug, warn};

use vitrine::{
    cart::{AddOutcome, Cart, CartError, CartLine, LineId, UpdateOutcome},
    product::{ProductDetail, ProductId},
    resolver::{ResolvedVariant, Selection},
    wishlist::Wishlist,
};

/// One shopper's mutable state: cart and wishlist. The two collections are
/// independent; a product may sit in both at once.
#[derive(Debug, Default)]
pub struct Session {
    cart: Cart,
    wishlist: Wishlist,
}

impl Session {
    /// An empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart lines, in insertion order.
    pub fn items(&self) -> &[CartLine] {
        self.cart.items()
    }

    /// Sum of snapshot price times quantity over all lines.
    pub fn subtotal(&self) -> u64 {
        self.cart.subtotal()
    }

    /// Total units across all lines.
    pub fn total_items(&self) -> u32 {
        self.cart.total_items()
    }

    /// Whether the cart has no lines.
    pub fn cart_is_empty(&self) -> bool {
        self.cart.items().is_empty()
    }

    /// Add units of a product to the cart. An unavailable variant leaves the
    /// cart untouched.
    pub fn add_to_cart(
        &mut self,
        product: ProductDetail,
        selection: Selection,
        quantity: NonZeroU32,
    ) -> AddOutcome {
        let product_id = product.id;
        let outcome = self.cart.add(product, selection, quantity);

        match outcome {
            AddOutcome::Unavailable => {
                warn!(?product_id, ?selection, "add to unavailable variant ignored");
            }
            AddOutcome::Added(line) | AddOutcome::Merged(line) => {
                debug!(?product_id, ?line, quantity = quantity.get(), "added to cart");
            }
        }

        outcome
    }

    /// Set a line's quantity verbatim; zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] for an unknown line.
    pub fn update_quantity(
        &mut self,
        line: LineId,
        quantity: u32,
    ) -> Result<UpdateOutcome, CartError> {
        let outcome = self.cart.update_quantity(line, quantity)?;

        debug!(?line, quantity, "cart quantity updated");

        Ok(outcome)
    }

    /// Remove a line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] for an unknown line.
    pub fn remove_from_cart(&mut self, line: LineId) -> Result<(), CartError> {
        self.cart.remove(line)?;

        debug!(?line, "cart line removed");

        Ok(())
    }

    /// Replace a line's snapshot with a freshly fetched product, keeping
    /// selection and quantity. Used by the pre-checkout live re-check.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] for an unknown line.
    pub fn refresh_snapshot(
        &mut self,
        line: LineId,
        product: ProductDetail,
    ) -> Result<(), CartError> {
        self.cart.refresh_snapshot(line, product)?;

        debug!(?line, "cart line snapshot refreshed");

        Ok(())
    }

    /// Empty the cart. Called after successful order placement.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("cart cleared");
    }

    /// Re-resolve a line's variant from its snapshot. A `None` means the
    /// snapshot has zero variants, which the normaliser should never produce;
    /// it is logged as the signal it is.
    pub fn resolve_line<'a>(&self, line: &'a CartLine) -> Option<ResolvedVariant<'a>> {
        let resolved = line.resolved();

        if resolved.is_none() {
            warn!(product_id = ?line.product.id, "cart line snapshot has no variants");
        }

        resolved
    }

    /// The wishlisted product ids, in insertion order.
    pub fn wishlist_items(&self) -> &[ProductId] {
        self.wishlist.items()
    }

    /// Whether the product is wishlisted.
    pub fn wishlist_contains(&self, id: ProductId) -> bool {
        self.wishlist.contains(id)
    }

    /// Flip a product's wishlist membership; returns whether it is present
    /// afterwards.
    pub fn toggle_wishlist(&mut self, id: ProductId) -> bool {
        self.wishlist.toggle(id)
    }

    /// Remove a product from the wishlist.
    pub fn remove_from_wishlist(&mut self, id: ProductId) -> bool {
        self.wishlist.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use vitrine::fixtures;
    use vitrine::product::{ColorId, SizeId};

    use super::*;

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
    }

    #[test]
    fn cart_and_wishlist_are_independent() {
        let mut session = Session::new();
        let tee = fixtures::tee();
        let id = tee.id;

        session.add_to_cart(
            tee,
            Selection::new(Some(ColorId(1)), Some(SizeId(11))),
            qty(1),
        );
        session.toggle_wishlist(id);

        assert_eq!(session.total_items(), 1);
        assert!(session.wishlist_contains(id));

        session.clear_cart();

        assert!(session.wishlist_contains(id), "clearing the cart leaves the wishlist");
    }

    #[test]
    fn accessors_reflect_cart_state() {
        let mut session = Session::new();

        session.add_to_cart(fixtures::mug(), Selection::default(), qty(3));

        assert_eq!(session.subtotal(), 3000);
        assert_eq!(session.total_items(), 3);
        assert!(!session.cart_is_empty());
    }
}
