//! Checkout flow
//!
//! Drives an order draft from `Drafting` through address selection, review
//! and placement. Forward transitions re-check their guards so a cart or
//! address mutated between steps cannot slip through, and order creation is a
//! single logical transaction: the cart is cleared only on a successful
//! response, and a failure returns the flow to `Reviewing` with the cart
//! untouched.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use vitrine::{
    checkout::{CheckoutTotals, ShippingPolicy, compute_totals},
    coupon::{AppliedCoupon, CouponCode},
    pricing::TaxRate,
    product::ProductId,
};

use crate::{
    domain::{
        addresses::models::Address,
        coupons::{CouponsService, errors::CouponsServiceError},
        orders::{
            OrdersService,
            errors::OrdersServiceError,
            models::{Order, OrderDraft, OrderLine, OrderTotals},
        },
    },
    latest::Latest,
    session::Session,
    uuids::OrderUuid,
};

/// Where the flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStage {
    /// Collecting the cart; nothing chosen yet.
    Drafting,

    /// An address has been chosen.
    AddressSelected,

    /// The confirmation modal is open.
    Reviewing,

    /// Order creation is in flight; cancellation is no longer possible.
    Placing,

    /// The order was created and the cart cleared.
    Placed,
}

/// Errors from checkout transitions.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// No shipping address has been selected.
    #[error("no address selected")]
    NoAddress,

    /// A cart line's product has been deactivated since it was added.
    #[error("product {0:?} is no longer active")]
    InactiveProduct(ProductId),

    /// The operation is not valid in the current stage.
    #[error("checkout is {actual:?}, expected {expected}")]
    WrongStage {
        /// Stage the operation requires.
        expected: &'static str,

        /// Stage the flow is actually in.
        actual: CheckoutStage,
    },

    /// A newer coupon validation superseded this one; its result was
    /// discarded.
    #[error("coupon validation superseded")]
    CouponSuperseded,

    /// Coupon validation failed.
    #[error(transparent)]
    Coupon(#[from] CouponsServiceError),

    /// Order creation failed.
    #[error(transparent)]
    Orders(#[from] OrdersServiceError),
}

/// The checkout engine for one order draft.
pub struct CheckoutFlow {
    coupons: Arc<dyn CouponsService>,
    orders: Arc<dyn OrdersService>,
    shipping: ShippingPolicy,
    tax_rate: TaxRate,
    stage: CheckoutStage,
    address: Option<Address>,
    coupon: Latest<AppliedCoupon>,
    placed: Option<Order>,
}

impl std::fmt::Debug for CheckoutFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutFlow")
            .field("stage", &self.stage)
            .field("address", &self.address)
            .field("coupon", &self.coupon)
            .finish_non_exhaustive()
    }
}

impl CheckoutFlow {
    /// Start a fresh flow in `Drafting`.
    pub fn new(
        coupons: Arc<dyn CouponsService>,
        orders: Arc<dyn OrdersService>,
        shipping: ShippingPolicy,
        tax_rate: TaxRate,
    ) -> Self {
        Self {
            coupons,
            orders,
            shipping,
            tax_rate,
            stage: CheckoutStage::Drafting,
            address: None,
            coupon: Latest::new(),
            placed: None,
        }
    }

    /// The current stage.
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// The selected address, if any.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// The applied coupon, if any.
    pub fn coupon(&self) -> Option<&AppliedCoupon> {
        self.coupon.get()
    }

    /// The created order, once the flow reaches `Placed`.
    pub fn placed_order(&self) -> Option<&Order> {
        self.placed.as_ref()
    }

    /// Choose a shipping address. Requires at least one cart line.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the cart is empty, or
    /// [`CheckoutError::WrongStage`] once placement has started.
    pub fn select_address(
        &mut self,
        session: &Session,
        address: Address,
    ) -> Result<(), CheckoutError> {
        self.require_before_placing("Drafting, AddressSelected or Reviewing")?;

        if session.cart_is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.address = Some(address);
        self.stage = CheckoutStage::AddressSelected;

        Ok(())
    }

    /// Open the confirmation review. Re-checks the address/cart guard, which
    /// defends against mutation between steps.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::WrongStage`] outside `AddressSelected`,
    /// [`CheckoutError::EmptyCart`] or [`CheckoutError::NoAddress`] when the
    /// guard no longer holds.
    pub fn open_review(&mut self, session: &Session) -> Result<(), CheckoutError> {
        if self.stage != CheckoutStage::AddressSelected {
            return Err(CheckoutError::WrongStage {
                expected: "AddressSelected",
                actual: self.stage,
            });
        }

        if session.cart_is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if self.address.is_none() {
            return Err(CheckoutError::NoAddress);
        }

        self.stage = CheckoutStage::Reviewing;

        Ok(())
    }

    /// Dismiss the flow. Valid at any point before `Placing`; no draft state
    /// is retained.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::WrongStage`] once placement has started.
    pub fn cancel(&mut self) -> Result<(), CheckoutError> {
        self.require_before_placing("Drafting, AddressSelected or Reviewing")?;

        self.address = None;
        self.coupon.invalidate();
        self.stage = CheckoutStage::Drafting;

        Ok(())
    }

    /// Validate a coupon against the current subtotal and hold the
    /// server-confirmed discount. A result superseded by a newer validation
    /// is discarded.
    ///
    /// # Errors
    ///
    /// Propagates rejection from the coupon service verbatim; a rejected code
    /// is an error, never a silent zero discount.
    pub async fn apply_coupon(
        &mut self,
        session: &Session,
        code: CouponCode,
    ) -> Result<AppliedCoupon, CheckoutError> {
        let ticket = self.coupon.begin();

        let validation = self.coupons.validate(&code, session.subtotal()).await?;

        let applied = AppliedCoupon {
            code: validation.code,
            discount_amount: validation.discount_amount,
        };

        if !self.coupon.accept(ticket, applied.clone()) {
            warn!(code = %applied.code.as_str(), "discarding superseded coupon validation");
            return Err(CheckoutError::CouponSuperseded);
        }

        Ok(applied)
    }

    /// Drop the applied coupon, also superseding any validation in flight.
    pub fn remove_coupon(&mut self) {
        self.coupon.invalidate();
    }

    /// Current totals: subtotal, threshold shipping, tax and the clamped
    /// coupon discount. Recomputed from session and coupon state on every
    /// call.
    pub fn totals(&self, session: &Session) -> CheckoutTotals {
        let discount = self.coupon.get().map_or(0, |c| c.discount_amount);

        compute_totals(session.subtotal(), self.shipping, self.tax_rate, discount)
    }

    /// Whether the confirm action may proceed. Checked before submission so
    /// the UI can disable the action instead of wasting a round trip.
    ///
    /// # Errors
    ///
    /// Returns the first blocking condition: empty cart, missing address, or
    /// a deactivated product in the cart.
    pub fn can_confirm(&self, session: &Session) -> Result<(), CheckoutError> {
        if session.cart_is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        if self.address.is_none() {
            return Err(CheckoutError::NoAddress);
        }

        if let Some(line) = session.items().iter().find(|l| !l.product.is_active) {
            return Err(CheckoutError::InactiveProduct(line.product.id));
        }

        Ok(())
    }

    /// Confirm the review and create the order.
    ///
    /// On success the cart is cleared and the flow moves to `Placed`; on
    /// failure the flow returns to `Reviewing` with the cart untouched, so an
    /// order is never created with the cart left full, nor the cart emptied
    /// without an order.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::WrongStage`] outside `Reviewing`, a blocking
    /// condition from [`Self::can_confirm`], or the order service failure.
    pub async fn place_order(&mut self, session: &mut Session) -> Result<Order, CheckoutError> {
        if self.stage != CheckoutStage::Reviewing {
            return Err(CheckoutError::WrongStage {
                expected: "Reviewing",
                actual: self.stage,
            });
        }

        self.can_confirm(session)?;

        let address = self.address.clone().ok_or(CheckoutError::NoAddress)?;
        let totals = self.totals(session);

        let draft = OrderDraft {
            client_reference: OrderUuid::generate(),
            items: session.items().iter().map(OrderLine::from).collect(),
            address,
            totals: OrderTotals {
                subtotal: totals.subtotal,
                shipping_fee: totals.shipping_fee,
                taxes: totals.taxes,
                discount: totals.discount,
                total: totals.total,
            },
            coupon_code: self.coupon.get().map(|c| c.code.clone()),
        };

        self.stage = CheckoutStage::Placing;

        match self.orders.create_order(draft).await {
            Ok(order) => {
                session.clear_cart();
                self.stage = CheckoutStage::Placed;
                self.placed = Some(order.clone());

                info!(order_id = %order.id, total = order.totals.total, "order placed");

                Ok(order)
            }
            Err(error) => {
                self.stage = CheckoutStage::Reviewing;

                Err(error.into())
            }
        }
    }

    fn require_before_placing(&self, expected: &'static str) -> Result<(), CheckoutError> {
        match self.stage {
            CheckoutStage::Placing | CheckoutStage::Placed => Err(CheckoutError::WrongStage {
                expected,
                actual: self.stage,
            }),
            _ => Ok(()),
        }
    }
}
