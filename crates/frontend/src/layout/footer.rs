use super::global_context::{use_app_context, AppPage};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__col">
                    <p class="footer__brand">"🌼 Vườn Mai Gò Cát"</p>
                    <p class="footer__text">
                        "Vườn mai truyền thống hơn 25 năm tại Long Trường, chuyên mai bonsai "
                        "cho thuê và bán dịp Tết."
                    </p>
                </div>

                <div class="footer__col">
                    <p class="footer__heading">"Liên Kết"</p>
                    <button class="footer__link" on:click=move |_| ctx.navigate(AppPage::Products)>
                        "Sản phẩm"
                    </button>
                    <button class="footer__link" on:click=move |_| ctx.navigate(AppPage::Booking)>
                        "Đặt lịch tham quan"
                    </button>
                    <button class="footer__link" on:click=move |_| ctx.navigate(AppPage::Contact)>
                        "Liên hệ tư vấn"
                    </button>
                </div>

                <div class="footer__col">
                    <p class="footer__heading">"Liên Hệ"</p>
                    <p class="footer__text">"56 Đường 882, P. Long Trường, TP. Hồ Chí Minh"</p>
                    <a class="footer__link" href="tel:0922727277">"092 272 7277"</a>
                    <p class="footer__text">"Hàng ngày: 7:00 - 18:00"</p>
                </div>
            </div>

            <p class="footer__copyright">"© 2026 Vườn Mai Gò Cát"</p>
        </footer>
    }
}
