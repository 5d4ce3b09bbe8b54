use catalog::{products, Product};
use leptos::prelude::*;

/// The visitor-facing pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    Home,
    Products,
    ProductDetail,
    Booking,
    Contact,
}

/// Navigation and selection state shared by every component.
///
/// A copyable struct of `RwSignal`s provided once at the root; pages write
/// through `navigate`/`open_product`, the shell reads `page` to decide what
/// to render.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<AppPage>,
    pub selected_product: RwSignal<Option<Product>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(AppPage::Home),
            selected_product: RwSignal::new(products().first().cloned()),
        }
    }

    /// Switch pages and scroll back to the top. CTA buttons live far down
    /// the page and would otherwise keep the old scroll position.
    pub fn navigate(&self, page: AppPage) {
        self.page.set(page);
        scroll_to_top();
    }

    /// Select a product and show its detail page.
    pub fn open_product(&self, product: Product) {
        self.selected_product.set(Some(product));
        self.navigate(AppPage::ProductDetail);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
