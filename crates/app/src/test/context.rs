//! Test context assembling mocked collaborator services.

use std::sync::Arc;

use jiff::Timestamp;

use vitrine::{checkout::ShippingPolicy, pricing::TaxRate};

use crate::{
    api::ApiError,
    checkout::CheckoutFlow,
    domain::{
        addresses::models::{Address, AddressKind},
        coupons::{MockCouponsService, errors::CouponsServiceError, service::CouponValidation},
        orders::{
            MockOrdersService,
            errors::OrdersServiceError,
            models::{Order, OrderStatus},
        },
    },
    uuids::{AddressUuid, OrderUuid},
};

/// Shipping rule used across checkout tests: free at 1999, else 89.
const TEST_POLICY: ShippingPolicy = ShippingPolicy {
    free_shipping_threshold: 1999,
    shipping_fee: 89,
};

/// A complete home address.
pub fn home_address() -> Address {
    Address {
        id: AddressUuid::generate(),
        name: "Ada Lovelace".to_string(),
        phone_number: Some("555-0100".to_string()),
        address_line1: "1 Analytical Way".to_string(),
        address_line2: None,
        city: "London".to_string(),
        state: "LDN".to_string(),
        postal_code: Some("EC1".to_string()),
        address_type: AddressKind::Home,
        is_default: true,
    }
}

/// Mocked collaborators plus the policy/tax configuration a flow needs.
/// Configure expectations, then call [`TestContext::flow`].
pub struct TestContext {
    pub coupons: MockCouponsService,
    pub orders: MockOrdersService,
    pub shipping: ShippingPolicy,
    pub tax_rate: TaxRate,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            coupons: MockCouponsService::new(),
            orders: MockOrdersService::new(),
            shipping: TEST_POLICY,
            tax_rate: TaxRate::from_basis_points(500),
        }
    }

    /// Orders echo the draft back with a server-issued id, like the real
    /// backend does.
    pub fn orders_succeed(&mut self) {
        self.orders.expect_create_order().returning(|draft| {
            Ok(Order {
                id: OrderUuid::generate(),
                status: OrderStatus::Pending,
                placed_at: Timestamp::now(),
                items: draft.items,
                address: draft.address,
                totals: draft.totals,
            })
        });
    }

    /// Order creation is rejected with the given message.
    pub fn orders_fail(&mut self, message: &str) {
        let message = message.to_string();

        self.orders
            .expect_create_order()
            .returning(move |_| Err(OrdersServiceError::Rejected(message.clone())));
    }

    /// Every code validates to the given discount amount.
    pub fn coupons_approve(&mut self, discount_amount: u64) {
        self.coupons.expect_validate().returning(move |code, _| {
            Ok(CouponValidation {
                code: code.clone(),
                discount_amount,
                kind: None,
                message: None,
            })
        });
    }

    /// Every code is rejected with the given message.
    pub fn coupons_reject(&mut self, message: &str) {
        let message = message.to_string();

        self.coupons
            .expect_validate()
            .returning(move |_, _| Err(CouponsServiceError::Rejected(message.clone())));
    }

    /// A coupon validation that fails at the transport layer.
    pub fn coupons_unreachable(&mut self) {
        self.coupons.expect_validate().returning(|_, _| {
            Err(CouponsServiceError::Api(ApiError::Unexpected(
                "connection refused".to_string(),
            )))
        });
    }

    /// Consume the context into a checkout flow over the configured mocks.
    pub fn flow(self) -> CheckoutFlow {
        CheckoutFlow::new(
            Arc::new(self.coupons),
            Arc::new(self.orders),
            self.shipping,
            self.tax_rate,
        )
    }
}
