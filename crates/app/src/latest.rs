//! Stale-response guard.
//!
//! A network result must never overwrite fresher state: a product fetch in
//! flight when its view goes away, or a coupon validation superseded by a
//! newer one, is discarded. [`Latest`] issues a ticket per request and only
//! accepts the result that still holds the newest ticket.
//!
//! Each stale-sensitive fetch owns its holder: the checkout flow keeps a
//! `Latest<AppliedCoupon>` for coupon validation, and a view wires its own
//! `Latest<ProductDetail>` or `Latest<Vec<Address>>` the same way, calling
//! [`Latest::begin`] before the request and [`Latest::accept`] with the
//! response.

/// Ticket identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Holder of the most recent value for one logical fetch.
#[derive(Debug)]
pub struct Latest<T> {
    value: Option<T>,
    generation: u64,
}

impl<T> Default for Latest<T> {
    fn default() -> Self {
        Self {
            value: None,
            generation: 0,
        }
    }
}

impl<T> Latest<T> {
    /// An empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new in-flight request, superseding all earlier tickets.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    /// Store `value` if `ticket` is still the newest. Returns whether the
    /// value was accepted; a superseded result is dropped.
    pub fn accept(&mut self, ticket: Ticket, value: T) -> bool {
        if ticket.0 != self.generation {
            return false;
        }

        self.value = Some(value);
        true
    }

    /// Drop the held value and supersede any outstanding tickets, e.g. when
    /// the owning view goes away.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.value = None;
    }

    /// The most recent accepted value.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Take the held value out, leaving the holder empty.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_wins() {
        let mut latest = Latest::new();

        let first = latest.begin();
        let second = latest.begin();

        assert!(latest.accept(second, "new"));
        assert!(!latest.accept(first, "stale"), "stale result is discarded");
        assert_eq!(latest.get(), Some(&"new"));
    }

    #[test]
    fn stale_result_cannot_overwrite_an_accepted_one() {
        let mut latest = Latest::new();

        let first = latest.begin();
        let second = latest.begin();

        assert!(latest.accept(second, 2));
        assert!(!latest.accept(first, 1));
        assert_eq!(latest.get(), Some(&2));
    }

    #[test]
    fn navigating_between_products_keeps_only_the_newest_detail() {
        use vitrine::fixtures;

        let mut latest = Latest::new();

        // The shopper opens the tee page, then navigates to the mug before
        // the tee fetch lands.
        let tee_fetch = latest.begin();
        let mug_fetch = latest.begin();

        assert!(latest.accept(mug_fetch, fixtures::mug()));
        assert!(!latest.accept(tee_fetch, fixtures::tee()));
        assert_eq!(latest.get().map(|p| p.id), Some(fixtures::mug().id));
    }

    #[test]
    fn invalidate_discards_value_and_outstanding_tickets() {
        let mut latest = Latest::new();

        let ticket = latest.begin();
        latest.invalidate();

        assert!(!latest.accept(ticket, 1));
        assert_eq!(latest.get(), None);
    }
}
