//! Builds the normalized product list from the embedded spreadsheet export.
//!
//! The transformation is pure and idempotent: the same rows always produce
//! the same list, in the same order. Rows without a usable code are dropped;
//! a duplicate code keeps the first row and logs the rest.

use crate::product::{Product, RawRecord};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Sentinel shown whenever a product image is missing on disk.
pub const FALLBACK_IMAGE: &str = "/no-avatar.png";

/// Fixed classification for the current stock.
pub const DEFAULT_CATEGORY: &str = "Mai Bonsai";

static RAW_JSON: &str = include_str!("../data/products_raw.json");

/// The catalog, built once from the embedded export and read-only afterwards.
static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    let rows: Vec<RawRecord> = serde_json::from_str(RAW_JSON).unwrap_or_else(|e| {
        log::error!("products_raw.json is not valid JSON: {e}");
        Vec::new()
    });
    build_catalog(&rows)
});

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Trim and collapse internal whitespace runs: "BS   01" -> "BS 01".
pub fn normalize_code(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip all whitespace for image file names: "BS 01" -> "BS01".
pub fn image_code(code: &str) -> String {
    code.split_whitespace().collect()
}

/// Millions of VND -> whole VND, rounded. Non-finite input degrades to
/// `None` so the UI shows "liên hệ" instead of a wrong price.
fn million_to_vnd(million: Option<f64>) -> Option<i64> {
    let vnd = million? * 1_000_000.0;
    vnd.is_finite().then(|| vnd.round() as i64)
}

/// Meters -> display string: 2.5 -> "2.5m", 2.0 -> "2m".
fn format_meters(meters: Option<f64>) -> Option<String> {
    let m = meters?;
    m.is_finite().then(|| format!("{m}m"))
}

/// Convert raw export rows into display-ready products, preserving row
/// order minus dropped records.
pub fn build_catalog(rows: &[RawRecord]) -> Vec<Product> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(raw_code) = row.code.as_deref() else {
            continue;
        };
        let code = normalize_code(raw_code);
        if code.is_empty() {
            continue;
        }
        if !seen.insert(code.clone()) {
            log::warn!("duplicate product code '{code}' in export, keeping the first row");
            continue;
        }

        // Image convention: public/products/BS01.jpg. The path is a
        // reference only; the UI swaps in FALLBACK_IMAGE when it 404s.
        let image = format!("/products/{}.jpg", image_code(&code));

        out.push(Product {
            name: format!("Mai {code}"),
            category: DEFAULT_CATEGORY.to_string(),
            price: million_to_vnd(row.sale_price_million),
            rent_price: million_to_vnd(row.rent_price_million),
            height: format_meters(row.height_m),
            width: format_meters(row.width_m),
            age: None,
            thumbnails: vec![image.clone()],
            description: format!(
                "Mã cây {code}. Vui lòng liên hệ để xem cây thực tế và nhận tư vấn chi tiết."
            ),
            image,
            id: code,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: Option<&str>) -> RawRecord {
        RawRecord {
            code: code.map(str::to_string),
            ..RawRecord::default()
        }
    }

    #[test]
    fn drops_rows_without_a_code() {
        let rows = vec![
            row(None),
            row(Some("")),
            row(Some("   ")),
            row(Some("BS 01")),
        ];
        let products = build_catalog(&rows);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "BS 01");
    }

    #[test]
    fn normalizes_codes_and_derives_image_path() {
        let products = build_catalog(&[row(Some("  BS   07 "))]);
        assert_eq!(products[0].id, "BS 07");
        assert_eq!(products[0].name, "Mai BS 07");
        assert_eq!(products[0].image, "/products/BS07.jpg");
        assert_eq!(products[0].thumbnails, vec!["/products/BS07.jpg"]);
    }

    #[test]
    fn converts_millions_to_vnd() {
        let rows = vec![RawRecord {
            code: Some("BS 01".into()),
            sale_price_million: Some(12.0),
            rent_price_million: None,
            height_m: Some(1.8),
            ..RawRecord::default()
        }];
        let p = &build_catalog(&rows)[0];
        assert_eq!(p.price, Some(12_000_000));
        assert_eq!(p.rent_price, None);
        assert_eq!(p.height.as_deref(), Some("1.8m"));
        assert_eq!(p.width, None);
    }

    #[test]
    fn fractional_millions_round_to_nearest_vnd() {
        let rows = vec![RawRecord {
            code: Some("BS 02".into()),
            rent_price_million: Some(7.5),
            ..RawRecord::default()
        }];
        assert_eq!(build_catalog(&rows)[0].rent_price, Some(7_500_000));
    }

    #[test]
    fn non_finite_numbers_degrade_to_contact() {
        let rows = vec![RawRecord {
            code: Some("BS 03".into()),
            sale_price_million: Some(f64::NAN),
            height_m: Some(f64::INFINITY),
            ..RawRecord::default()
        }];
        let p = &build_catalog(&rows)[0];
        assert_eq!(p.price, None);
        assert_eq!(p.height, None);
    }

    #[test]
    fn whole_meters_format_without_decimals() {
        let rows = vec![RawRecord {
            code: Some("BS 04".into()),
            height_m: Some(2.0),
            width_m: Some(1.25),
            ..RawRecord::default()
        }];
        let p = &build_catalog(&rows)[0];
        assert_eq!(p.height.as_deref(), Some("2m"));
        assert_eq!(p.width.as_deref(), Some("1.25m"));
    }

    #[test]
    fn duplicate_codes_keep_the_first_row() {
        let mut first = row(Some("BS 05"));
        first.rent_price_million = Some(5.0);
        let mut second = row(Some("BS  05"));
        second.rent_price_million = Some(9.0);

        let products = build_catalog(&[first, second]);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].rent_price, Some(5_000_000));
    }

    #[test]
    fn loading_is_idempotent() {
        let rows = vec![
            row(Some("BS 01")),
            RawRecord {
                code: Some("BS 02".into()),
                rent_price_million: Some(3.2),
                height_m: Some(1.6),
                ..RawRecord::default()
            },
        ];
        assert_eq!(build_catalog(&rows), build_catalog(&rows));
    }

    #[test]
    fn embedded_export_parses_and_has_unique_codes() {
        let products = products();
        assert!(!products.is_empty());

        let mut ids = HashSet::new();
        for p in products {
            assert!(ids.insert(&p.id), "duplicate id {} in export", p.id);
            assert!(!p.image.is_empty());
            assert_eq!(p.category, DEFAULT_CATEGORY);
        }
    }
}
