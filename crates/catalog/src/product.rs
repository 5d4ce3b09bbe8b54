use serde::{Deserialize, Serialize};

/// One row of the source spreadsheet export (`data/products_raw.json`).
///
/// Keys stay exactly as the Vietnamese column headers so a fresh export can
/// drop in without a mapping step. Every numeric column may be null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Mã Cây", default)]
    pub code: Option<String>,

    #[serde(rename = "Giá Thuê (triệu)", default)]
    pub rent_price_million: Option<f64>,

    #[serde(rename = "Giá Bán (triệu)", default)]
    pub sale_price_million: Option<f64>,

    #[serde(rename = "Cao_m", default)]
    pub height_m: Option<f64>,

    #[serde(rename = "Ngang_m", default)]
    pub width_m: Option<f64>,

    /// Trunk circumference; in the export but not shown on the site.
    #[serde(rename = "Hoành_cm", default)]
    pub girth_cm: Option<f64>,

    /// Pot diameter; in the export but not shown on the site.
    #[serde(rename = "Chậu_m", default)]
    pub pot_m: Option<f64>,
}

/// Display-ready product entity, the unit everything past the loader works
/// with.
///
/// `None` on a price or dimension means "liên hệ" (contact for details),
/// never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display code, whitespace-normalized (e.g. "BS 01"). Unique.
    pub id: String,
    /// Display name derived from the code (e.g. "Mai BS 01").
    pub name: String,
    pub category: String,
    /// Sale price in VND.
    pub price: Option<i64>,
    /// Rental price in VND.
    pub rent_price: Option<i64>,
    /// Display string such as "2.5m".
    pub height: Option<String>,
    /// Canopy width display string.
    pub width: Option<String>,
    /// Reserved; the current export has no age column.
    pub age: Option<u32>,
    /// Primary image path; never empty.
    pub image: String,
    pub thumbnails: Vec<String>,
    pub description: String,
}
