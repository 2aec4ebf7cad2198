//! Catalog normalisation
//!
//! Turns a raw product payload (a flat variant list, each variant tagged with
//! an optional colour and optional size) into colour and size option lists,
//! a sorted gallery and a display price range.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::product::{
    ColorId, ColorOption, GalleryImage, ProductDetail, ProductId, SizeId, SizeOption, Variant,
    VariantId,
};

/// Raw colour object as embedded in variants and gallery images.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawColor {
    /// Colour identifier.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Optional CSS hex value.
    #[serde(default)]
    pub hex: Option<String>,
}

/// Raw size object as embedded in variants.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSize {
    /// Size identifier.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Explicit display ordering, when the seller set one.
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// Raw variant line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariant {
    /// Variant identifier.
    pub id: u64,

    /// Embedded colour, when the variant is colour-specific.
    #[serde(default)]
    pub color: Option<RawColor>,

    /// Embedded size, when the variant is size-specific.
    #[serde(default)]
    pub size: Option<RawSize>,

    /// Units on hand.
    #[serde(default)]
    pub stock_quantity: u32,

    /// Explicit seller availability flag.
    #[serde(default = "default_true")]
    pub is_available: bool,

    /// Whether stock gates purchasability. Payloads missing the field are
    /// treated as tracked.
    #[serde(default = "default_true")]
    pub track_inventory: bool,

    /// Base price in minor units. Absent or negative values exclude the
    /// variant from the price range.
    #[serde(default)]
    pub base_price: Option<i64>,

    /// Sale price in minor units. Negative values are treated as absent.
    #[serde(default)]
    pub sale_price: Option<i64>,
}

/// Raw gallery image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImage {
    /// Image URL.
    pub url: String,

    /// Alt text.
    #[serde(default)]
    pub alt: Option<String>,

    /// Whether the seller marked this the primary image.
    #[serde(default)]
    pub is_primary: bool,

    /// Explicit display ordering.
    #[serde(default)]
    pub sort_order: Option<i32>,

    /// Colour tag; a colour may exist only as a tagged image.
    #[serde(default)]
    pub color: Option<RawColor>,
}

/// Raw product payload as fetched from the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    /// Product identifier.
    pub id: u64,

    /// URL slug.
    pub slug: String,

    /// Display name.
    pub name: String,

    /// Master kill-switch.
    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Gallery images, unordered.
    #[serde(default)]
    pub images: Vec<RawImage>,

    /// Flat variant list.
    #[serde(default)]
    pub variants: Vec<RawVariant>,
}

fn default_true() -> bool {
    true
}

/// Normalise a raw product payload into a [`ProductDetail`].
///
/// Zero-variant products normalise successfully (price 0/0, empty options);
/// resolution on such a product simply finds no variant.
pub fn normalize(raw: RawProduct) -> ProductDetail {
    let variants = collect_variants(&raw.variants);
    let colors = collect_colors(&raw.variants, &raw.images);
    let sizes = collect_sizes(&raw.variants, &variants);
    let (price, original) = price_range(&raw.variants);
    let gallery = sort_gallery(raw.images);

    ProductDetail {
        id: ProductId(raw.id),
        slug: raw.slug,
        name: raw.name,
        is_active: raw.is_active,
        price,
        original,
        gallery,
        colors,
        sizes,
        variants,
    }
}

/// Keep the first variant per (colour, size) pair; drop duplicates so variant
/// identity stays unique within the product.
fn collect_variants(raw: &[RawVariant]) -> Vec<Variant> {
    let mut seen: FxHashSet<(Option<u64>, Option<u64>)> = FxHashSet::default();
    let mut variants = Vec::with_capacity(raw.len());

    for v in raw {
        let pair = (
            v.color.as_ref().map(|c| c.id),
            v.size.as_ref().map(|s| s.id),
        );

        if !seen.insert(pair) {
            continue;
        }

        variants.push(Variant {
            id: VariantId(v.id),
            color_id: v.color.as_ref().map(|c| ColorId(c.id)),
            size_id: v.size.as_ref().map(|s| SizeId(s.id)),
            stock_quantity: v.stock_quantity,
            is_available: v.is_available,
            track_inventory: v.track_inventory,
            base_price: v.base_price.and_then(|p| u64::try_from(p).ok()).unwrap_or(0),
            sale_price: v.sale_price.and_then(|p| u64::try_from(p).ok()),
        });
    }

    variants
}

/// Deduplicate colours by id across variants and colour-tagged gallery
/// images. First occurrence wins for display metadata; variants are walked
/// before images.
fn collect_colors(variants: &[RawVariant], images: &[RawImage]) -> SmallVec<[ColorOption; 4]> {
    let mut seen: FxHashSet<u64> = FxHashSet::default();
    let mut colors = SmallVec::new();

    let tagged = variants
        .iter()
        .filter_map(|v| v.color.as_ref())
        .chain(images.iter().filter_map(|i| i.color.as_ref()));

    for color in tagged {
        if seen.insert(color.id) {
            colors.push(ColorOption {
                id: ColorId(color.id),
                name: color.name.clone(),
                hex: color.hex.clone(),
            });
        }
    }

    colors
}

/// Deduplicate sizes by id; `in_stock` is the OR of purchasability over every
/// variant of that size, across colours.
fn collect_sizes(raw: &[RawVariant], variants: &[Variant]) -> SmallVec<[SizeOption; 4]> {
    let mut seen: FxHashSet<u64> = FxHashSet::default();
    let mut sizes: SmallVec<[(SizeOption, Option<i32>); 4]> = SmallVec::new();

    for size in raw.iter().filter_map(|v| v.size.as_ref()) {
        if !seen.insert(size.id) {
            continue;
        }

        let id = SizeId(size.id);
        let in_stock = variants
            .iter()
            .any(|v| v.size_id == Some(id) && v.is_purchasable());

        sizes.push((
            SizeOption {
                id,
                name: size.name.clone(),
                in_stock,
            },
            size.sort_order,
        ));
    }

    // Explicit sort order ascending, absent orders after every explicit one,
    // lexical name as the tie-breaker. The key must be total or the sort
    // panics on mixed payloads.
    sizes.sort_by(|(a, a_order), (b, b_order)| {
        (a_order.unwrap_or(i32::MAX), &a.name).cmp(&(b_order.unwrap_or(i32::MAX), &b.name))
    });

    sizes.into_iter().map(|(size, _)| size).collect()
}

/// Sort images primary-first, then by explicit sort order, stable.
fn sort_gallery(mut images: Vec<RawImage>) -> Vec<GalleryImage> {
    images.sort_by_key(|i| (!i.is_primary, i.sort_order.unwrap_or(i32::MAX)));

    images
        .into_iter()
        .map(|i| GalleryImage {
            url: i.url,
            alt: i.alt,
            is_primary: i.is_primary,
            color_id: i.color.map(|c| ColorId(c.id)),
        })
        .collect()
}

/// Derive the display price pair from the raw variant list.
///
/// Only variants with a present, non-negative base price participate.
/// `price = min_sale` iff the cheapest sale is positive and either undercuts
/// the cheapest base or every base is zero; `original` only differs from
/// `price` when a genuine sale undercut the base, so no fake discount is ever
/// shown.
fn price_range(variants: &[RawVariant]) -> (u64, u64) {
    let min_base = variants
        .iter()
        .filter_map(|v| v.base_price)
        .filter_map(|p| u64::try_from(p).ok())
        .min();

    let Some(min_base) = min_base else {
        // No usable base price anywhere: the cheapest sale, if any, is all
        // there is to show.
        let sale = variants
            .iter()
            .filter_map(|v| v.sale_price)
            .filter_map(|p| u64::try_from(p).ok())
            .filter(|&s| s > 0)
            .min()
            .unwrap_or(0);
        return (sale, sale);
    };

    // A sale only counts on a variant that also carries a usable base; a
    // base-less variant's sale cannot undercut another variant's base.
    let min_sale = variants
        .iter()
        .filter(|v| v.base_price.is_some_and(|p| p >= 0))
        .filter_map(|v| v.sale_price)
        .filter_map(|p| u64::try_from(p).ok())
        .filter(|&s| s > 0)
        .min();

    match min_sale {
        Some(sale) if sale < min_base || min_base == 0 => (sale, min_base.max(sale)),
        _ => (min_base, min_base),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn raw_variant(id: u64, base: i64, sale: Option<i64>) -> RawVariant {
        RawVariant {
            id,
            color: None,
            size: None,
            stock_quantity: 10,
            is_available: true,
            track_inventory: true,
            base_price: Some(base),
            sale_price: sale,
        }
    }

    fn raw_product(variants: Vec<RawVariant>) -> RawProduct {
        RawProduct {
            id: 1,
            slug: "tee".to_string(),
            name: "Tee".to_string(),
            is_active: true,
            images: Vec::new(),
            variants,
        }
    }

    #[test]
    fn sale_below_base_is_the_display_price() {
        let product = normalize(raw_product(vec![raw_variant(1, 1000, Some(800))]));

        assert_eq!(product.price, 800);
        assert_eq!(product.original, 1000);
    }

    #[test]
    fn sale_above_base_is_never_a_discount() {
        let product = normalize(raw_product(vec![raw_variant(1, 1000, Some(1200))]));

        assert_eq!(product.price, 1000);
        assert_eq!(product.original, 1000);
    }

    #[test]
    fn all_zero_base_prices_fall_back_to_sale() {
        let product = normalize(raw_product(vec![raw_variant(1, 0, Some(500))]));

        assert_eq!(product.price, 500);
        assert_eq!(product.original, 500);
    }

    #[test]
    fn sale_on_a_baseless_variant_does_not_undercut_another_base() {
        let mut baseless = raw_variant(1, 0, Some(100));
        baseless.base_price = None;

        let product = normalize(raw_product(vec![baseless, raw_variant(2, 1000, None)]));

        assert_eq!(product.price, 1000);
        assert_eq!(product.original, 1000);
    }

    #[test]
    fn baseless_sale_still_shows_when_no_variant_has_a_base() {
        let mut baseless = raw_variant(1, 0, Some(100));
        baseless.base_price = None;

        let product = normalize(raw_product(vec![baseless]));

        assert_eq!(product.price, 100);
        assert_eq!(product.original, 100);
    }

    #[test]
    fn zero_variant_product_normalises_to_zero_prices() {
        let product = normalize(raw_product(Vec::new()));

        assert_eq!(product.price, 0);
        assert_eq!(product.original, 0);
        assert!(product.variants.is_empty());
    }

    #[test]
    fn duplicate_color_size_pairs_keep_the_first_variant() {
        let mut a = raw_variant(1, 1000, None);
        let mut b = raw_variant(2, 900, None);

        a.color = Some(RawColor {
            id: 7,
            name: "Red".to_string(),
            hex: None,
        });
        b.color = Some(RawColor {
            id: 7,
            name: "Red".to_string(),
            hex: None,
        });

        let product = normalize(raw_product(vec![a, b]));

        assert_eq!(product.variants.len(), 1);
        assert_eq!(product.variants.first().map(|v| v.id), Some(VariantId(1)));
    }

    #[test]
    fn colors_include_image_only_swatches_first_occurrence_wins() {
        let mut variant = raw_variant(1, 1000, None);
        variant.color = Some(RawColor {
            id: 1,
            name: "Red".to_string(),
            hex: Some("#f00".to_string()),
        });

        let mut raw = raw_product(vec![variant]);
        raw.images = vec![
            RawImage {
                url: "red-alt.jpg".to_string(),
                alt: None,
                is_primary: false,
                sort_order: Some(2),
                color: Some(RawColor {
                    id: 1,
                    name: "Crimson".to_string(),
                    hex: Some("#c00".to_string()),
                }),
            },
            RawImage {
                url: "blue.jpg".to_string(),
                alt: None,
                is_primary: false,
                sort_order: Some(1),
                color: Some(RawColor {
                    id: 2,
                    name: "Blue".to_string(),
                    hex: None,
                }),
            },
        ];

        let product = normalize(raw);

        assert_eq!(product.colors.len(), 2);
        let red = product.colors.iter().find(|c| c.id == ColorId(1));
        assert_eq!(red.map(|c| c.name.as_str()), Some("Red"));
        assert!(product.colors.iter().any(|c| c.id == ColorId(2)));
    }

    #[test]
    fn size_in_stock_is_an_or_across_colors() {
        let size = RawSize {
            id: 5,
            name: "M".to_string(),
            sort_order: None,
        };

        let mut sold_out = raw_variant(1, 1000, None);
        sold_out.size = Some(size.clone());
        sold_out.stock_quantity = 0;
        sold_out.color = Some(RawColor {
            id: 1,
            name: "Red".to_string(),
            hex: None,
        });

        let mut in_stock = raw_variant(2, 1000, None);
        in_stock.size = Some(size);
        in_stock.color = Some(RawColor {
            id: 2,
            name: "Blue".to_string(),
            hex: None,
        });

        let product = normalize(raw_product(vec![sold_out, in_stock]));

        assert_eq!(product.sizes.len(), 1);
        assert!(product.sizes.iter().all(|s| s.in_stock), "size M has stock in blue");
    }

    #[test]
    fn sizes_sort_by_sort_order_then_name() {
        let mut s = raw_variant(1, 1000, None);
        let mut m = raw_variant(2, 1000, None);
        let mut l = raw_variant(3, 1000, None);

        s.size = Some(RawSize {
            id: 1,
            name: "S".to_string(),
            sort_order: Some(1),
        });
        m.size = Some(RawSize {
            id: 2,
            name: "M".to_string(),
            sort_order: Some(2),
        });
        l.size = Some(RawSize {
            id: 3,
            name: "L".to_string(),
            sort_order: None,
        });

        let product = normalize(raw_product(vec![m, l, s]));

        let names: Vec<&str> = product.sizes.iter().map(|s| s.name.as_str()).collect();

        // L carries no sort order and sorts after the explicitly ordered
        // sizes.
        assert_eq!(names, vec!["S", "M", "L"]);
    }

    #[test]
    fn size_sort_handles_many_mixed_sort_orders() {
        // Alternating explicit/absent sort orders across enough sizes to
        // exercise the sort's merge passes.
        let variants: Vec<RawVariant> = (0..40)
            .map(|i| {
                let mut v = raw_variant(i + 1, 1000, None);
                v.size = Some(RawSize {
                    id: i + 1,
                    name: format!("size-{i:02}"),
                    sort_order: (i % 2 == 0).then(|| i32::try_from(i).unwrap_or(0)),
                });
                v
            })
            .collect();

        let product = normalize(raw_product(variants));

        assert_eq!(product.sizes.len(), 40);

        // Explicitly ordered sizes come first, ascending; the rest follow
        // lexically.
        let names: Vec<&str> = product.sizes.iter().map(|s| s.name.as_str()).collect();
        let (ordered, unordered) = names.split_at(20);

        assert!(ordered.iter().all(|n| {
            n.trim_start_matches("size-")
                .parse::<u64>()
                .is_ok_and(|i| i % 2 == 0)
        }));
        assert!(ordered.windows(2).all(|w| w[0] <= w[1]));
        assert!(unordered.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn gallery_sorts_primary_first_then_sort_order() {
        let mut raw = raw_product(vec![raw_variant(1, 1000, None)]);
        raw.images = vec![
            RawImage {
                url: "c.jpg".to_string(),
                alt: None,
                is_primary: false,
                sort_order: Some(2),
                color: None,
            },
            RawImage {
                url: "b.jpg".to_string(),
                alt: None,
                is_primary: false,
                sort_order: Some(1),
                color: None,
            },
            RawImage {
                url: "a.jpg".to_string(),
                alt: None,
                is_primary: true,
                sort_order: Some(9),
                color: None,
            },
        ];

        let product = normalize(raw);

        let urls: Vec<&str> = product.gallery.iter().map(|i| i.url.as_str()).collect();

        assert_eq!(urls, vec!["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(product.display_image().map(|i| i.url.as_str()), Some("a.jpg"));
        assert_eq!(product.hover_image().map(|i| i.url.as_str()), Some("b.jpg"));
    }

    #[test]
    fn payload_deserialises_from_camel_case_json() -> TestResult {
        let raw: RawProduct = serde_json::from_str(
            r##"{
                "id": 42,
                "slug": "hoodie",
                "name": "Hoodie",
                "isActive": true,
                "images": [{"url": "x.jpg", "isPrimary": true}],
                "variants": [{
                    "id": 1,
                    "color": {"id": 3, "name": "Black", "hex": "#000"},
                    "size": {"id": 9, "name": "M", "sortOrder": 2},
                    "stockQuantity": 4,
                    "isAvailable": true,
                    "basePrice": 4999,
                    "salePrice": 3999
                }]
            }"##,
        )?;

        let product = normalize(raw);

        assert_eq!(product.id, ProductId(42));
        assert_eq!(product.price, 3999);
        assert_eq!(product.original, 4999);
        assert!(product.variants.iter().all(|v| v.track_inventory), "default is tracked");

        Ok(())
    }
}
