//! The catalog query engine: category, price-range, height-range and
//! free-text predicates plus pagination over the normalized product list.
//!
//! Governing rule: missing or malformed data never hides a product. An
//! unknown rental price matches every price range, an unparseable height
//! matches every height range, and an out-of-range page number clamps.

use crate::product::Product;
use once_cell::sync::Lazy;
use regex::Regex;

/// Products shown per page in the storefront grid.
pub const PAGE_SIZE: usize = 9;

/// Sentinel category option meaning "no constraint".
pub const ALL_CATEGORIES: &str = "All";

/// Rental-price ranges, in millions of VND. Half-open intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    All,
    Under5,
    From5To10,
    From10To20,
    Over20,
}

impl PriceRange {
    pub const OPTIONS: [PriceRange; 5] = [
        PriceRange::All,
        PriceRange::Under5,
        PriceRange::From5To10,
        PriceRange::From10To20,
        PriceRange::Over20,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PriceRange::All => "All",
            PriceRange::Under5 => "under5",
            PriceRange::From5To10 => "5to10",
            PriceRange::From10To20 => "10to20",
            PriceRange::Over20 => "over20",
        }
    }

    /// Unknown keys fall back to `All` rather than erroring.
    pub fn from_key(key: &str) -> Self {
        Self::OPTIONS
            .into_iter()
            .find(|r| r.key() == key)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceRange::All => "Tất cả mức giá",
            PriceRange::Under5 => "Dưới 5 triệu",
            PriceRange::From5To10 => "5 - 10 triệu",
            PriceRange::From10To20 => "10 - 20 triệu",
            PriceRange::Over20 => "Trên 20 triệu",
        }
    }

    /// Check a rental price in VND against this range. A product without a
    /// price is never filtered out.
    pub fn matches(self, price_vnd: Option<i64>) -> bool {
        let Some(vnd) = price_vnd else {
            return true;
        };
        let million = vnd as f64 / 1_000_000.0;
        match self {
            PriceRange::All => true,
            PriceRange::Under5 => million < 5.0,
            PriceRange::From5To10 => (5.0..10.0).contains(&million),
            PriceRange::From10To20 => (10.0..20.0).contains(&million),
            PriceRange::Over20 => million >= 20.0,
        }
    }
}

/// Height ranges in meters. Half-open intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightRange {
    #[default]
    All,
    Under1,
    From1To2,
    From2To3,
    From3To4,
}

impl HeightRange {
    pub const OPTIONS: [HeightRange; 5] = [
        HeightRange::All,
        HeightRange::Under1,
        HeightRange::From1To2,
        HeightRange::From2To3,
        HeightRange::From3To4,
    ];

    pub fn key(self) -> &'static str {
        match self {
            HeightRange::All => "All",
            HeightRange::Under1 => "under1",
            HeightRange::From1To2 => "1to2",
            HeightRange::From2To3 => "2to3",
            HeightRange::From3To4 => "3to4",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::OPTIONS
            .into_iter()
            .find(|r| r.key() == key)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            HeightRange::All => "Tất cả",
            HeightRange::Under1 => "Dưới 1m",
            HeightRange::From1To2 => "1m - 2m",
            HeightRange::From2To3 => "2m - 3m",
            HeightRange::From3To4 => "3m - 4m",
        }
    }

    /// Check a height in meters against this range. A product whose height
    /// is unknown or unparseable is never filtered out.
    pub fn matches(self, meters: Option<f64>) -> bool {
        let Some(m) = meters else {
            return true;
        };
        match self {
            HeightRange::All => true,
            HeightRange::Under1 => m < 1.0,
            HeightRange::From1To2 => (1.0..2.0).contains(&m),
            HeightRange::From2To3 => (2.0..3.0).contains(&m),
            HeightRange::From3To4 => (3.0..4.0).contains(&m),
        }
    }
}

static METERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+(?:[.,]\d+)?)\s*m$").unwrap());
static COMPOUND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*m\s*(\d+)$").unwrap());
static CENTIMETERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+(?:[.,]\d+)?)\s*cm$").unwrap());
static ANY_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)").unwrap());

fn parse_decimal(s: &str) -> Option<f64> {
    let n: f64 = s.replace(',', ".").parse().ok()?;
    n.is_finite().then_some(n)
}

/// Parse a display height back to meters.
///
/// Dimension strings are hand-maintained in the export, so several notations
/// show up: "2.5m" / "2,5m", compound "1m8" (tenths) and "1m20" (hundredths),
/// "180cm", and free text containing a number somewhere. Returns `None` for
/// anything unreadable instead of erroring.
pub fn parse_height_meters(raw: &str) -> Option<f64> {
    let s = raw.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    if let Some(caps) = METERS_RE.captures(&s) {
        return parse_decimal(&caps[1]);
    }

    if let Some(caps) = COMPOUND_RE.captures(&s) {
        let whole: f64 = caps[1].parse().ok()?;
        let tail = &caps[2];
        let frac: f64 = tail.parse().ok()?;
        // One trailing digit means tenths ("1m8"), otherwise hundredths.
        let scale = if tail.len() == 1 { 10.0 } else { 100.0 };
        return Some(whole + frac / scale);
    }

    if let Some(caps) = CENTIMETERS_RE.captures(&s) {
        return parse_decimal(&caps[1]).map(|cm| cm / 100.0);
    }

    // Last resort: first number anywhere in the string.
    ANY_NUMBER_RE
        .captures(&s)
        .and_then(|caps| parse_decimal(&caps[1]))
}

/// One set of visitor-selected criteria. Every field independently defaults
/// to "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub category: String,
    pub price: PriceRange,
    pub height: HeightRange,
    pub search: String,
    /// 1-indexed; out-of-range values clamp instead of erroring.
    pub page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            price: PriceRange::All,
            height: HeightRange::All,
            search: String::new(),
            page: 1,
        }
    }
}

/// One page of results plus the numbers the pager needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub total_count: usize,
    pub total_pages: usize,
    /// The clamped 1-indexed page actually shown.
    pub page: usize,
}

fn matches_query(product: &Product, query: &CatalogQuery, needle: &str) -> bool {
    let category_ok =
        query.category == ALL_CATEGORIES || product.category == query.category;

    // Search matches the display name or the whitespace-collapsed code;
    // "bs 01" finds "BS 01", "bs01" does not.
    let search_ok = needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.id.to_lowercase().contains(needle);

    let price_ok = query.price.matches(product.rent_price);

    let height_ok = query
        .height
        .matches(product.height.as_deref().and_then(parse_height_meters));

    category_ok && search_ok && price_ok && height_ok
}

/// Apply all four predicates conjunctively in one pass, then slice out the
/// requested page.
pub fn run_query(products: &[Product], query: &CatalogQuery) -> CatalogPage {
    let needle = query.search.trim().to_lowercase();

    let matched: Vec<&Product> = products
        .iter()
        .filter(|p| matches_query(p, query, &needle))
        .collect();

    let total_count = matched.len();
    let total_pages = ((total_count + PAGE_SIZE - 1) / PAGE_SIZE).max(1);
    let page = query.page.clamp(1, total_pages);

    let start = (page - 1) * PAGE_SIZE;
    let items = matched
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    CatalogPage {
        items,
        total_count,
        total_pages,
        page,
    }
}

/// Distinct categories present in the list, case-insensitively sorted, with
/// the "All" sentinel prepended. Derived from the data, never hardcoded.
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut cats: Vec<String> = Vec::new();
    for p in products {
        if !p.category.is_empty() && !cats.contains(&p.category) {
            cats.push(p.category.clone());
        }
    }
    cats.sort_by_key(|c| c.to_lowercase());

    let mut options = Vec::with_capacity(cats.len() + 1);
    options.push(ALL_CATEGORIES.to_string());
    options.extend(cats);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str, rent_vnd: Option<i64>, height: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Mai {id}"),
            category: category.to_string(),
            price: None,
            rent_price: rent_vnd,
            height: height.map(str::to_string),
            width: None,
            age: None,
            image: format!("/products/{id}.jpg"),
            thumbnails: vec![],
            description: String::new(),
        }
    }

    #[test]
    fn parses_plain_meter_notation() {
        assert_eq!(parse_height_meters("2.5m"), Some(2.5));
        assert_eq!(parse_height_meters("1,8m"), Some(1.8));
        assert_eq!(parse_height_meters(" 2M "), Some(2.0));
    }

    #[test]
    fn parses_compound_meter_notation() {
        assert_eq!(parse_height_meters("1m8"), Some(1.8));
        assert_eq!(parse_height_meters("1m20"), Some(1.2));
        assert_eq!(parse_height_meters("2m30"), Some(2.3));
        assert_eq!(parse_height_meters("1 m 8"), Some(1.8));
    }

    #[test]
    fn parses_centimeter_notation() {
        assert_eq!(parse_height_meters("180cm"), Some(1.8));
        assert_eq!(parse_height_meters("95 cm"), Some(0.95));
    }

    #[test]
    fn falls_back_to_first_number_in_free_text() {
        assert_eq!(parse_height_meters("khoảng 2.5 tới 3"), Some(2.5));
        assert_eq!(parse_height_meters("cao 3"), Some(3.0));
    }

    #[test]
    fn unreadable_heights_yield_none() {
        assert_eq!(parse_height_meters(""), None);
        assert_eq!(parse_height_meters("chưa đo"), None);
    }

    #[test]
    fn height_formatting_round_trips() {
        for meters in [0.8, 1.8, 2.5, 3.0] {
            let display = format!("{meters}m");
            let parsed = parse_height_meters(&display).unwrap();
            assert!((parsed - meters).abs() < 1e-9, "{display}");
        }
    }

    #[test]
    fn price_ranges_are_half_open() {
        let m = |v: f64| Some((v * 1_000_000.0) as i64);

        assert!(PriceRange::Under5.matches(m(4.99)));
        assert!(!PriceRange::Under5.matches(m(5.0)));
        assert!(PriceRange::From5To10.matches(m(5.0)));
        assert!(!PriceRange::From5To10.matches(m(10.0)));
        assert!(PriceRange::From10To20.matches(m(10.0)));
        assert!(!PriceRange::From10To20.matches(m(20.0)));
        assert!(PriceRange::Over20.matches(m(20.0)));
    }

    #[test]
    fn unknown_price_matches_every_range() {
        for range in PriceRange::OPTIONS {
            assert!(range.matches(None), "{:?}", range);
        }
    }

    #[test]
    fn unknown_height_matches_every_range() {
        for range in HeightRange::OPTIONS {
            assert!(range.matches(None), "{:?}", range);
        }
    }

    #[test]
    fn range_keys_round_trip_and_bad_keys_fall_back() {
        for range in PriceRange::OPTIONS {
            assert_eq!(PriceRange::from_key(range.key()), range);
        }
        assert_eq!(PriceRange::from_key("garbage"), PriceRange::All);
        assert_eq!(HeightRange::from_key("2to3"), HeightRange::From2To3);
        assert_eq!(HeightRange::from_key(""), HeightRange::All);
    }

    #[test]
    fn price_range_filters_conjunctively() {
        let list = vec![
            product("BS 01", "Mai Bonsai", Some(7_000_000), None),
            product("BS 02", "Mai Bonsai", Some(3_000_000), None),
        ];
        let query = CatalogQuery {
            price: PriceRange::From5To10,
            ..CatalogQuery::default()
        };

        let page = run_query(&list, &query);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].id, "BS 01");
    }

    #[test]
    fn search_is_case_insensitive_over_collapsed_id() {
        let list = vec![product("BS 01", "Mai Bonsai", None, None)];

        let hit = CatalogQuery {
            search: "bs 01".into(),
            ..CatalogQuery::default()
        };
        assert_eq!(run_query(&list, &hit).total_count, 1);

        // The collapsed id is the canonical search key, so the fully
        // stripped form does not match.
        let miss = CatalogQuery {
            search: "bs01".into(),
            ..CatalogQuery::default()
        };
        assert_eq!(run_query(&list, &miss).total_count, 0);
    }

    #[test]
    fn empty_search_matches_everything() {
        let list = vec![
            product("BS 01", "Mai Bonsai", None, None),
            product("BS 02", "Mai Bonsai", None, None),
        ];
        let query = CatalogQuery {
            search: "   ".into(),
            ..CatalogQuery::default()
        };
        assert_eq!(run_query(&list, &query).total_count, 2);
    }

    #[test]
    fn category_filter_is_exact_with_all_sentinel() {
        let list = vec![
            product("BS 01", "Mai Bonsai", None, None),
            product("MT 01", "Mai Tán", None, None),
        ];

        let all = run_query(&list, &CatalogQuery::default());
        assert_eq!(all.total_count, 2);

        let only = CatalogQuery {
            category: "Mai Tán".into(),
            ..CatalogQuery::default()
        };
        let page = run_query(&list, &only);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].id, "MT 01");
    }

    #[test]
    fn height_filter_parses_display_strings() {
        let list = vec![
            product("BS 01", "Mai Bonsai", None, Some("1m8")),
            product("BS 02", "Mai Bonsai", None, Some("2.5m")),
            product("BS 03", "Mai Bonsai", None, None),
        ];
        let query = CatalogQuery {
            height: HeightRange::From1To2,
            ..CatalogQuery::default()
        };

        let page = run_query(&list, &query);
        // "2.5m" is excluded; the unknown height is kept.
        assert_eq!(page.total_count, 2);
        assert_eq!(page.items[0].id, "BS 01");
        assert_eq!(page.items[1].id, "BS 03");
    }

    #[test]
    fn pagination_slices_and_reports_totals() {
        let list: Vec<Product> = (1..=20)
            .map(|i| product(&format!("BS {i:02}"), "Mai Bonsai", None, None))
            .collect();

        let first = run_query(&list, &CatalogQuery::default());
        assert_eq!(first.total_count, 20);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.page, 1);
        assert_eq!(first.items.len(), PAGE_SIZE);
        assert_eq!(first.items[0].id, "BS 01");

        let last = CatalogQuery {
            page: 3,
            ..CatalogQuery::default()
        };
        let page = run_query(&list, &last);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "BS 19");
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let list: Vec<Product> = (1..=12)
            .map(|i| product(&format!("BS {i:02}"), "Mai Bonsai", None, None))
            .collect();

        let too_far = CatalogQuery {
            page: 99,
            ..CatalogQuery::default()
        };
        assert_eq!(run_query(&list, &too_far).page, 2);

        let zero = CatalogQuery {
            page: 0,
            ..CatalogQuery::default()
        };
        assert_eq!(run_query(&list, &zero).page, 1);
    }

    #[test]
    fn empty_result_still_reports_one_page() {
        let list = vec![product("BS 01", "Mai Bonsai", None, None)];
        let query = CatalogQuery {
            search: "không tồn tại".into(),
            ..CatalogQuery::default()
        };

        let page = run_query(&list, &query);
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn category_options_are_derived_and_sorted() {
        let list = vec![
            product("MT 01", "Mai Tán", None, None),
            product("BS 01", "Mai Bonsai", None, None),
            product("BS 02", "Mai Bonsai", None, None),
        ];
        assert_eq!(
            category_options(&list),
            vec!["All", "Mai Bonsai", "Mai Tán"]
        );
    }
}
