use crate::layout::global_context::{use_app_context, AppPage};
use crate::shared::components::product_card::ProductCard;
use catalog::products;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    let featured: Vec<_> = products().iter().take(3).cloned().collect();

    view! {
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">"Vườn Mai Gò Cát"</h1>
                <p class="hero__subtitle">
                    "Mai bonsai truyền thống hơn 25 năm — cho thuê và bán dịp Tết"
                </p>
                <div class="hero__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| ctx.navigate(AppPage::Products)
                    >
                        "Xem Sản Phẩm"
                    </button>
                    <button
                        class="btn btn--outline-light"
                        on:click=move |_| ctx.navigate(AppPage::Booking)
                    >
                        "Đặt Lịch Tham Quan"
                    </button>
                </div>
            </section>

            <section class="home-perks">
                <div class="home-perks__item">
                    <p class="home-perks__title">"🌼 Hơn 25 Năm Kinh Nghiệm"</p>
                    <p class="home-perks__note">"Nghệ nhân chăm sóc từng gốc mai"</p>
                </div>
                <div class="home-perks__item">
                    <p class="home-perks__title">"🚚 Giao Nhận Tận Nơi"</p>
                    <p class="home-perks__note">"Vận chuyển an toàn trong TP.HCM"</p>
                </div>
                <div class="home-perks__item">
                    <p class="home-perks__title">"🎧 Tư Vấn Tận Tâm"</p>
                    <p class="home-perks__note">"Hỗ trợ chọn cây đúng không gian"</p>
                </div>
            </section>

            <section class="home-featured">
                <h2 class="home-featured__title">"Mai Nổi Bật"</h2>
                <div class="home-featured__grid">
                    {featured
                        .into_iter()
                        .map(|p| view! { <ProductCard product=p /> })
                        .collect_view()}
                </div>
                <button
                    class="btn btn--outline home-featured__more"
                    on:click=move |_| ctx.navigate(AppPage::Products)
                >
                    "Xem tất cả sản phẩm"
                </button>
            </section>

            <section class="home-cta">
                <p class="home-cta__text">
                    "Ghé vườn để chọn trực tiếp gốc mai ưng ý cho Tết này."
                </p>
                <button class="btn btn--accent" on:click=move |_| ctx.navigate(AppPage::Booking)>
                    "Đặt Lịch Ngay"
                </button>
            </section>
        </div>
    }
}
