//! Cart
//!
//! An in-memory collection of cart lines keyed by (product, colour, size).
//! Each line owns a frozen snapshot of the product taken at add time: the
//! snapshot is the price authority for the line, while stock ceilings are
//! re-derived from the snapshot's variants on every read.

use std::num::NonZeroU32;

use thiserror::Error;

use crate::{
    pricing,
    product::ProductDetail,
    resolver::{ResolvedVariant, Selection, resolve},
};

/// Cart line identifier, issued by the cart, monotonic per cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u64);

/// Errors from cart line mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The given line id is not present in the cart.
    #[error("cart line {0:?} not found")]
    LineNotFound(LineId),
}

/// One line in the cart: a product snapshot, a selection and a quantity.
#[derive(Debug, Clone)]
pub struct CartLine {
    id: LineId,

    /// Frozen copy of the product at add time.
    pub product: ProductDetail,

    /// The shopper's colour/size selection for this line.
    pub selection: Selection,

    /// Units of this line. Never below one while the line exists.
    pub quantity: NonZeroU32,
}

impl CartLine {
    /// The line's cart-issued identifier.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// This line's total: snapshot display price times quantity.
    pub fn total(&self) -> u64 {
        pricing::line_total(self.product.price, self.quantity.get())
    }

    /// Re-resolve this line's variant from the snapshot. `None` only for a
    /// zero-variant snapshot, which the normaliser should never produce.
    pub fn resolved(&self) -> Option<ResolvedVariant<'_>> {
        resolve(&self.product, self.selection)
    }
}

/// Outcome of an add operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Added(LineId),

    /// An existing line with the same (product, colour, size) absorbed the
    /// quantity.
    Merged(LineId),

    /// The resolved variant is not purchasable; the cart is unchanged.
    Unavailable,
}

/// Outcome of a quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The line now holds the given quantity.
    Updated(NonZeroU32),

    /// The requested quantity was zero, so the line was removed.
    Removed,
}

/// The shopper's cart. Lines keep insertion order across mutations.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_line_id: u64,
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart lines, in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |acc, line| acc.saturating_add(line.quantity.get()))
    }

    /// Sum of snapshot price times quantity over all lines.
    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .fold(0, |acc, line| acc.saturating_add(line.total()))
    }

    /// Look up a line by id.
    pub fn line(&self, id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Add `quantity` units of a product with the given selection.
    ///
    /// An existing line with identical (product, colour, size) is
    /// incremented; otherwise a new line is appended with a fresh id. When
    /// the selection resolves to an unavailable variant (or to nothing), the
    /// add has no observable effect on cart contents. Quantity ceilings are a
    /// display concern and are not enforced here.
    pub fn add(
        &mut self,
        product: ProductDetail,
        selection: Selection,
        quantity: NonZeroU32,
    ) -> AddOutcome {
        let available = resolve(&product, selection).is_some_and(|r| r.is_available());

        if !available {
            return AddOutcome::Unavailable;
        }

        let existing = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id && line.selection == selection);

        if let Some(line) = existing {
            line.quantity = line.quantity.saturating_add(quantity.get());
            return AddOutcome::Merged(line.id);
        }

        self.next_line_id += 1;
        let id = LineId(self.next_line_id);

        self.lines.push(CartLine {
            id,
            product,
            selection,
            quantity,
        });

        AddOutcome::Added(id)
    }

    /// Set a line's quantity verbatim. Zero removes the line. The caller is
    /// responsible for clamping against the stock ceiling beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no line has the given id.
    pub fn update_quantity(&mut self, id: LineId, quantity: u32) -> Result<UpdateOutcome, CartError> {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            self.remove(id)?;
            return Ok(UpdateOutcome::Removed);
        };

        let line = self
            .lines
            .iter_mut()
            .find(|line| line.id == id)
            .ok_or(CartError::LineNotFound(id))?;

        line.quantity = quantity;

        Ok(UpdateOutcome::Updated(quantity))
    }

    /// Delete a line unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no line has the given id.
    pub fn remove(&mut self, id: LineId) -> Result<(), CartError> {
        let index = self
            .lines
            .iter()
            .position(|line| line.id == id)
            .ok_or(CartError::LineNotFound(id))?;

        self.lines.remove(index);

        Ok(())
    }

    /// Replace a line's product snapshot with a freshly fetched one, keeping
    /// selection and quantity. This is the explicit pre-checkout re-check
    /// step; the cart never tracks live prices on its own.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] when no line has the given id.
    pub fn refresh_snapshot(&mut self, id: LineId, product: ProductDetail) -> Result<(), CartError> {
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.id == id)
            .ok_or(CartError::LineNotFound(id))?;

        line.product = product;

        Ok(())
    }

    /// Empty the cart. Called after successful order placement.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
