//! Scripted checkout walkthrough.
//!
//! Builds a cart from the fixture catalogue, mutates it the way a shopper
//! would, and prints the totals breakdown at each step.

use std::num::NonZeroU32;

use anyhow::{Result, anyhow};

use vitrine::{
    cart::{AddOutcome, Cart},
    checkout::{ShippingPolicy, compute_totals},
    fixtures,
    pricing::{TaxRate, discount_percent},
    product::{ColorId, SizeId},
    resolver::Selection,
};

const POLICY: ShippingPolicy = ShippingPolicy {
    free_shipping_threshold: 1999,
    shipping_fee: 89,
};

const TAX: TaxRate = TaxRate::from_basis_points(500);

#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> Result<()> {
    let mut cart = Cart::new();

    let tee = fixtures::tee();
    let red_medium = Selection::new(Some(ColorId(1)), Some(SizeId(11)));

    if let Some(percent) = discount_percent(tee.price, tee.original) {
        println!("{}: {} (was {}, -{percent}%)", tee.name, tee.price, tee.original);
    }

    let AddOutcome::Added(line) = cart.add(tee, red_medium, NonZeroU32::MIN) else {
        return Err(anyhow!("expected the tee to be purchasable"));
    };

    cart.add(fixtures::mug(), Selection::default(), NonZeroU32::MIN);

    print_totals("one tee, one mug", &cart);

    // The shopper bumps the tee to two units.
    cart.update_quantity(line, 2)?;

    print_totals("tee x2", &cart);

    // A validated 10% coupon, as the backend would report it.
    let discount = cart.subtotal() / 10;
    let totals = compute_totals(cart.subtotal(), POLICY, TAX, discount);

    println!("with coupon: discount {} => total {}", totals.discount, totals.total);

    Ok(())
}

#[expect(clippy::print_stdout, reason = "Example program output to user")]
fn print_totals(label: &str, cart: &Cart) {
    let totals = compute_totals(cart.subtotal(), POLICY, TAX, 0);

    println!(
        "{label}: subtotal {} + shipping {} + tax {} = {}",
        totals.subtotal, totals.shipping_fee, totals.taxes, totals.total
    );
}
