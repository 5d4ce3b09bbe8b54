use super::global_context::{use_app_context, AppPage};
use leptos::prelude::*;

const NAV_ITEMS: [(AppPage, &str); 4] = [
    (AppPage::Home, "Trang Chủ"),
    (AppPage::Products, "Sản Phẩm"),
    (AppPage::Booking, "Đặt Lịch"),
    (AppPage::Contact, "Liên Hệ"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <button class="navbar__brand" on:click=move |_| ctx.navigate(AppPage::Home)>
                    <span class="navbar__brand-icon">"🌼"</span>
                    <span class="navbar__brand-name">"Vườn Mai Gò Cát"</span>
                </button>

                <nav class="navbar__links">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(page, label)| {
                            // The detail page keeps the products tab lit.
                            let is_active = move || {
                                let current = ctx.page.get();
                                current == page
                                    || (page == AppPage::Products
                                        && current == AppPage::ProductDetail)
                            };
                            view! {
                                <button
                                    class=move || {
                                        if is_active() {
                                            "navbar__link navbar__link--active"
                                        } else {
                                            "navbar__link"
                                        }
                                    }
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <a class="navbar__hotline" href="tel:0922727277">"📞 092 272 7277"</a>
            </div>
        </header>
    }
}
