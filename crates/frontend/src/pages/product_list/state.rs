use catalog::filter::ALL_CATEGORIES;
use catalog::{CatalogQuery, HeightRange, PriceRange};
use leptos::prelude::*;

/// Visitor-selected criteria for the product grid.
///
/// Ephemeral by design: rebuilt on every visit, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    pub category: String,
    pub price: PriceRange,
    pub height: HeightRange,
    pub search: String,
    /// 1-indexed.
    pub page: usize,
}

impl Default for ListState {
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

impl ListState {
    // Changing any criterion returns the visitor to the first page.

    pub fn set_category(&mut self, category: String) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_price(&mut self, price: PriceRange) {
        self.price = price;
        self.page = 1;
    }

    pub fn set_height(&mut self, height: HeightRange) {
        self.height = height;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_query(&self) -> CatalogQuery {
        CatalogQuery {
            category: self.category.clone(),
            price: self.price,
            height: self.height,
            search: self.search.clone(),
            page: self.page,
        }
    }
}

pub fn create_state() -> RwSignal<ListState> {
    RwSignal::new(ListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_changes_reset_the_page() {
        let mut state = ListState {
            page: 4,
            ..ListState::default()
        };

        state.set_price(PriceRange::From5To10);
        assert_eq!(state.page, 1);

        state.set_page(3);
        state.set_search("bs".into());
        assert_eq!(state.page, 1);

        state.set_page(2);
        state.set_height(HeightRange::From1To2);
        assert_eq!(state.page, 1);

        state.set_page(2);
        state.set_category("Mai Bonsai".into());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn reset_restores_every_default() {
        let mut state = ListState::default();
        state.set_search("mai".into());
        state.set_price(PriceRange::Over20);
        state.set_page(5);

        state.reset();
        assert_eq!(state, ListState::default());
    }

    #[test]
    fn query_mirrors_the_state() {
        let mut state = ListState::default();
        state.set_height(HeightRange::From2To3);
        state.set_page(2);

        let query = state.to_query();
        assert_eq!(query.height, HeightRange::From2To3);
        assert_eq!(query.page, 2);
        assert_eq!(query.category, ALL_CATEGORIES);
    }
}
