//! Variant resolution
//!
//! Maps a (product, colour selection, size selection) triple to exactly one
//! variant, with graceful degradation: a cart line may predate a size choice,
//! or a previously valid combination may have gone out of stock, and the
//! caller must never see "no variant" while the product has any variant at
//! all. Resolution is a pure function of its inputs.

use crate::product::{ColorId, ProductDetail, SizeId, Variant};

/// A shopper's colour/size selection. An unselected axis matches anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Selected colour, if any.
    pub color: Option<ColorId>,

    /// Selected size, if any.
    pub size: Option<SizeId>,
}

impl Selection {
    /// Selection with both axes chosen.
    pub fn new(color: Option<ColorId>, size: Option<SizeId>) -> Self {
        Self { color, size }
    }
}

/// The resolved variant together with the product state needed to derive
/// availability and quantity ceilings.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedVariant<'a> {
    /// The single variant the selection resolved to.
    pub variant: &'a Variant,

    product_active: bool,
}

impl ResolvedVariant<'_> {
    /// Units on hand for the resolved variant.
    pub fn stock_quantity(&self) -> u32 {
        self.variant.stock_quantity
    }

    /// Whether the variant can currently be bought: the product kill-switch,
    /// the seller flag and stock must all allow it.
    pub fn is_available(&self) -> bool {
        self.product_active && self.variant.is_purchasable()
    }

    /// Whether a line holding `current_qty` units has hit the stock ceiling.
    /// Untracked variants have no ceiling.
    pub fn at_stock_limit(&self, current_qty: u32) -> bool {
        self.is_available()
            && self.variant.track_inventory
            && current_qty >= self.variant.stock_quantity
    }

    /// Whether a line holding `current_qty` units may take one more.
    pub fn can_increase(&self, current_qty: u32) -> bool {
        self.is_available()
            && (!self.variant.track_inventory || current_qty < self.variant.stock_quantity)
    }
}

/// Resolve a selection to exactly one variant.
///
/// Ordered fallback, first match wins:
/// 1. exact match (an unselected axis matches anything);
/// 2. first variant matching only the selected colour;
/// 3. first variant matching only the selected size;
/// 4. the product's first variant.
///
/// Returns `None` only when the product has no variants at all.
pub fn resolve(product: &ProductDetail, selection: Selection) -> Option<ResolvedVariant<'_>> {
    let variants = &product.variants;

    let exact = variants.iter().find(|v| {
        selection.color.is_none_or(|c| v.color_id == Some(c))
            && selection.size.is_none_or(|s| v.size_id == Some(s))
    });

    let by_color = || {
        selection
            .color
            .and_then(|c| variants.iter().find(|v| v.color_id == Some(c)))
    };

    let by_size = || {
        selection
            .size
            .and_then(|s| variants.iter().find(|v| v.size_id == Some(s)))
    };

    let variant = exact
        .or_else(by_color)
        .or_else(by_size)
        .or_else(|| variants.first())?;

    Some(ResolvedVariant {
        variant,
        product_active: product.is_active,
    })
}

#[cfg(test)]
mod tests {
    use smallvec::SmallVec;

    use crate::product::{ProductId, VariantId};

    use super::*;

    fn variant(id: u64, color: Option<u64>, size: Option<u64>) -> Variant {
        Variant {
            id: VariantId(id),
            color_id: color.map(ColorId),
            size_id: size.map(SizeId),
            stock_quantity: 3,
            is_available: true,
            track_inventory: true,
            base_price: 1000,
            sale_price: None,
        }
    }

    fn product(variants: Vec<Variant>) -> ProductDetail {
        ProductDetail {
            id: ProductId(1),
            slug: "tee".to_string(),
            name: "Tee".to_string(),
            is_active: true,
            price: 1000,
            original: 1000,
            gallery: Vec::new(),
            colors: SmallVec::new(),
            sizes: SmallVec::new(),
            variants,
        }
    }

    fn resolved_id(product: &ProductDetail, selection: Selection) -> Option<VariantId> {
        resolve(product, selection).map(|r| r.variant.id)
    }

    #[test]
    fn exact_match_wins() {
        let product = product(vec![
            variant(1, Some(1), Some(1)),
            variant(2, Some(1), Some(2)),
        ]);

        let selection = Selection::new(Some(ColorId(1)), Some(SizeId(2)));

        assert_eq!(resolved_id(&product, selection), Some(VariantId(2)));
    }

    #[test]
    fn unselected_axis_matches_anything() {
        let product = product(vec![
            variant(1, Some(1), Some(1)),
            variant(2, Some(2), Some(1)),
        ]);

        let selection = Selection::new(Some(ColorId(2)), None);

        assert_eq!(resolved_id(&product, selection), Some(VariantId(2)));
    }

    #[test]
    fn color_fallback_beats_size_fallback() {
        let product = product(vec![
            variant(1, Some(1), None),
            variant(2, None, Some(2)),
        ]);

        // No variant has both colour 1 and size 2; step 2 (colour) must win
        // over step 3 (size).
        let selection = Selection::new(Some(ColorId(1)), Some(SizeId(2)));

        assert_eq!(resolved_id(&product, selection), Some(VariantId(1)));
    }

    #[test]
    fn size_fallback_when_color_never_matches() {
        let product = product(vec![
            variant(1, Some(1), Some(1)),
            variant(2, Some(1), Some(2)),
        ]);

        let selection = Selection::new(Some(ColorId(9)), Some(SizeId(2)));

        assert_eq!(resolved_id(&product, selection), Some(VariantId(2)));
    }

    #[test]
    fn positional_default_when_nothing_matches() {
        let product = product(vec![
            variant(1, Some(1), Some(1)),
            variant(2, Some(2), Some(2)),
        ]);

        let selection = Selection::new(Some(ColorId(9)), Some(SizeId(9)));

        assert_eq!(resolved_id(&product, selection), Some(VariantId(1)));
    }

    #[test]
    fn zero_variant_product_resolves_to_none() {
        let product = product(Vec::new());

        assert!(resolve(&product, Selection::default()).is_none());
    }

    #[test]
    fn resolution_is_idempotent() {
        let product = product(vec![
            variant(1, Some(1), None),
            variant(2, None, Some(2)),
        ]);

        let selection = Selection::new(Some(ColorId(1)), Some(SizeId(2)));

        let first = resolved_id(&product, selection);
        let second = resolved_id(&product, selection);

        assert_eq!(first, second);
    }

    #[test]
    fn stock_ceiling_at_three_units() {
        let product = product(vec![variant(1, None, None)]);

        let resolved = resolve(&product, Selection::default());

        match resolved {
            Some(r) => {
                assert!(r.can_increase(1));
                assert!(r.can_increase(2));
                assert!(!r.can_increase(3));
                assert!(!r.at_stock_limit(2));
                assert!(r.at_stock_limit(3));
            }
            None => panic!("expected a resolved variant, got None"),
        }
    }

    #[test]
    fn untracked_variant_has_no_ceiling() {
        let mut v = variant(1, None, None);
        v.track_inventory = false;
        v.stock_quantity = 0;

        let product = product(vec![v]);

        match resolve(&product, Selection::default()) {
            Some(r) => {
                assert!(r.is_available());
                assert!(r.can_increase(10_000));
                assert!(!r.at_stock_limit(10_000));
            }
            None => panic!("expected a resolved variant, got None"),
        }
    }

    #[test]
    fn inactive_product_overrides_variant_availability() {
        let mut p = product(vec![variant(1, None, None)]);
        p.is_active = false;

        match resolve(&p, Selection::default()) {
            Some(r) => {
                assert!(!r.is_available());
                assert!(!r.can_increase(0));
            }
            None => panic!("expected a resolved variant, got None"),
        }
    }
}
