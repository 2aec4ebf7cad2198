//! Products

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// Colour option identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(pub u64);

/// Size option identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeId(pub u64);

/// Variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u64);

/// A colour a product can be bought in, or shown as (a swatch may exist only
/// as a tagged gallery image).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOption {
    /// Colour identifier.
    pub id: ColorId,

    /// Display name.
    pub name: String,

    /// Optional CSS hex value for the swatch.
    pub hex: Option<String>,
}

/// A size a product can be bought in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeOption {
    /// Size identifier.
    pub id: SizeId,

    /// Display name.
    pub name: String,

    /// Whether any variant of this size, across all colours, is purchasable.
    pub in_stock: bool,
}

/// One image in a product's ordered gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// Image URL.
    pub url: String,

    /// Alt text, when provided.
    pub alt: Option<String>,

    /// Whether the seller marked this the primary image.
    pub is_primary: bool,

    /// Colour this image belongs to, when it is colour-specific.
    pub color_id: Option<ColorId>,
}

/// The only sellable unit: one concrete (colour, size) combination with its
/// own stock and price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Variant identifier.
    pub id: VariantId,

    /// Colour axis, when the variant is colour-specific.
    pub color_id: Option<ColorId>,

    /// Size axis, when the variant is size-specific.
    pub size_id: Option<SizeId>,

    /// Units on hand. Only meaningful when `track_inventory` is set.
    pub stock_quantity: u32,

    /// Explicit seller availability flag.
    pub is_available: bool,

    /// Whether stock gates purchasability and quantity ceilings. When unset,
    /// the variant sells without a ceiling.
    pub track_inventory: bool,

    /// Base price in minor units.
    pub base_price: u64,

    /// Optional sale price in minor units. Only honoured as a sale when
    /// positive and strictly below `base_price`.
    pub sale_price: Option<u64>,
}

impl Variant {
    /// Whether this variant can currently be bought, ignoring the product's
    /// master kill-switch.
    pub fn is_purchasable(&self) -> bool {
        self.is_available && (!self.track_inventory || self.stock_quantity > 0)
    }
}

/// The fetched product aggregate. Created by [`crate::catalog::normalize`],
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    /// Product identifier.
    pub id: ProductId,

    /// URL slug.
    pub slug: String,

    /// Display name.
    pub name: String,

    /// Master kill-switch; overrides all variant state when false.
    pub is_active: bool,

    /// Display price in minor units: the cheapest saleable price.
    pub price: u64,

    /// Strike-through price. Always `>= price`; equal when no genuine sale.
    pub original: u64,

    /// Ordered gallery, primary image first.
    pub gallery: Vec<GalleryImage>,

    /// Union of colours seen across variants and colour-tagged gallery images.
    pub colors: SmallVec<[ColorOption; 4]>,

    /// Union of sizes seen across variants, sorted for display.
    pub sizes: SmallVec<[SizeOption; 4]>,

    /// The sellable variants.
    pub variants: Vec<Variant>,
}

impl ProductDetail {
    /// The default display image: first in the sorted gallery.
    pub fn display_image(&self) -> Option<&GalleryImage> {
        self.gallery.first()
    }

    /// The hover/alternate image: second in the gallery, falling back to the
    /// primary when the gallery has only one image.
    pub fn hover_image(&self) -> Option<&GalleryImage> {
        self.gallery.get(1).or_else(|| self.gallery.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(stock: u32, available: bool, track: bool) -> Variant {
        Variant {
            id: VariantId(1),
            color_id: None,
            size_id: None,
            stock_quantity: stock,
            is_available: available,
            track_inventory: track,
            base_price: 1000,
            sale_price: None,
        }
    }

    #[test]
    fn purchasable_requires_availability_flag() {
        assert!(!variant(5, false, true).is_purchasable());
        assert!(variant(5, true, true).is_purchasable());
    }

    #[test]
    fn tracked_variant_with_no_stock_is_not_purchasable() {
        assert!(!variant(0, true, true).is_purchasable());
    }

    #[test]
    fn untracked_variant_sells_regardless_of_stock() {
        assert!(variant(0, true, false).is_purchasable());
    }
}
