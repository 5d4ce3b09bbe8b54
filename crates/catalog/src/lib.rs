//! Domain core for the Vườn Mai Gò Cát storefront.
//!
//! Holds everything the UI crate consumes but that has no business being
//! tangled up with wasm: the product catalog built from the embedded
//! spreadsheet export, the filter/search/paginate engine behind the product
//! list, and the visit-booking contract. All of it is synchronous, pure and
//! natively unit-testable.

pub mod booking;
pub mod filter;
pub mod loader;
pub mod product;

pub use filter::{CatalogPage, CatalogQuery, HeightRange, PriceRange, PAGE_SIZE};
pub use loader::{products, DEFAULT_CATEGORY, FALLBACK_IMAGE};
pub use product::{Product, RawRecord};
