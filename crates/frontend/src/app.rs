use crate::layout::footer::Footer;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::navbar::Navbar;
use crate::pages::booking::BookingPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::product_detail::ProductDetailPage;
use crate::pages::product_list::ProductListPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single source of truth for navigation and product selection,
    // provided to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    view! {
        <div class="site">
            <Navbar />

            <main class="site__main">
                {move || match ctx.page.get() {
                    AppPage::Home => view! { <HomePage /> }.into_any(),
                    AppPage::Products => view! { <ProductListPage /> }.into_any(),
                    AppPage::ProductDetail => match ctx.selected_product.get() {
                        Some(product) => view! { <ProductDetailPage product=product /> }.into_any(),
                        None => view! { <ProductListPage /> }.into_any(),
                    },
                    AppPage::Booking => view! { <BookingPage /> }.into_any(),
                    AppPage::Contact => view! { <ContactPage /> }.into_any(),
                }}
            </main>

            <Footer />
            <FloatingContact />
        </div>
    }
}

/// Persistent floating call/chat buttons, shown on small screens.
#[component]
fn FloatingContact() -> impl IntoView {
    view! {
        <div class="floating-contact">
            <a
                class="floating-contact__btn floating-contact__btn--chat"
                href="https://zalo.me/0922727277"
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Chat Zalo"
            >
                "💬"
            </a>
            <a
                class="floating-contact__btn floating-contact__btn--call"
                href="tel:0922727277"
                aria-label="Gọi điện"
            >
                "📞"
            </a>
        </div>
    }
}
