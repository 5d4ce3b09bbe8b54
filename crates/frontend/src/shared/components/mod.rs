pub mod pagination_controls;
pub mod product_card;
pub mod search_input;
