//! Product fixtures
//!
//! Small catalogue shared by unit tests, integration tests and the example.
//! Everything goes through [`crate::catalog::normalize`] so fixtures exercise
//! the same path real payloads take.

use crate::{
    catalog::{RawColor, RawImage, RawProduct, RawSize, RawVariant, normalize},
    product::ProductDetail,
};

fn red() -> RawColor {
    RawColor {
        id: 1,
        name: "Red".to_string(),
        hex: Some("#c0392b".to_string()),
    }
}

fn blue() -> RawColor {
    RawColor {
        id: 2,
        name: "Blue".to_string(),
        hex: Some("#2980b9".to_string()),
    }
}

fn medium() -> RawSize {
    RawSize {
        id: 11,
        name: "M".to_string(),
        sort_order: Some(1),
    }
}

fn large() -> RawSize {
    RawSize {
        id: 12,
        name: "L".to_string(),
        sort_order: Some(2),
    }
}

fn variant(
    id: u64,
    color: Option<RawColor>,
    size: Option<RawSize>,
    stock: u32,
    available: bool,
) -> RawVariant {
    RawVariant {
        id,
        color,
        size,
        stock_quantity: stock,
        is_available: available,
        track_inventory: true,
        base_price: Some(1000),
        sale_price: None,
    }
}

/// A tee on sale: red and blue, sizes M and L, blue/L flagged unavailable.
/// Displays 800 with a strike-through 1000.
pub fn tee() -> ProductDetail {
    let mut red_m = variant(1, Some(red()), Some(medium()), 3, true);
    let mut red_l = variant(2, Some(red()), Some(large()), 5, true);
    red_m.sale_price = Some(800);
    red_l.sale_price = Some(800);

    let blue_m = variant(3, Some(blue()), Some(medium()), 2, true);
    let blue_l = variant(4, Some(blue()), Some(large()), 4, false);

    normalize(RawProduct {
        id: 101,
        slug: "classic-tee".to_string(),
        name: "Classic Tee".to_string(),
        is_active: true,
        images: vec![
            RawImage {
                url: "tee-front.jpg".to_string(),
                alt: Some("Classic Tee".to_string()),
                is_primary: true,
                sort_order: Some(1),
                color: None,
            },
            RawImage {
                url: "tee-back.jpg".to_string(),
                alt: None,
                is_primary: false,
                sort_order: Some(2),
                color: None,
            },
        ],
        variants: vec![red_m, red_l, blue_m, blue_l],
    })
}

/// A single-variant mug with no colour or size axis, priced 1000.
pub fn mug() -> ProductDetail {
    normalize(RawProduct {
        id: 102,
        slug: "mug".to_string(),
        name: "Mug".to_string(),
        is_active: true,
        images: Vec::new(),
        variants: vec![variant(1, None, None, 10, true)],
    })
}

/// A gift card: untracked inventory, never hits a stock ceiling.
pub fn gift_card() -> ProductDetail {
    let mut v = variant(1, None, None, 0, true);
    v.track_inventory = false;
    v.base_price = Some(2500);

    normalize(RawProduct {
        id: 103,
        slug: "gift-card".to_string(),
        name: "Gift Card".to_string(),
        is_active: true,
        images: Vec::new(),
        variants: vec![v],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tee_displays_the_sale_price() {
        let tee = tee();

        assert_eq!(tee.price, 800);
        assert_eq!(tee.original, 1000);
        assert_eq!(tee.colors.len(), 2);
        assert_eq!(tee.sizes.len(), 2);
    }

    #[test]
    fn gift_card_has_no_stock_ceiling() {
        let card = gift_card();

        assert!(card.variants.iter().all(|v| !v.track_inventory), "untracked");
        assert_eq!(card.price, 2500);
    }
}
