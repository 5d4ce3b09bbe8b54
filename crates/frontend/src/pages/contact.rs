use leptos::prelude::*;

const MAPS_URL: &str = "https://www.google.com/maps/search/?api=1&query=56%20%C4%90%C6%B0%E1%BB%9Dng%20882%2C%20P.%20Long%20Tr%C6%B0%E1%BB%9Dng%2C%20TP.%20H%E1%BB%93%20Ch%C3%AD%20Minh";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page page--contact">
            <section class="page-banner page-banner--contact">
                <h1 class="page-banner__title">"Liên Hệ Tư Vấn"</h1>
                <p class="page-banner__subtitle">
                    "Đội ngũ chuyên gia sẵn sàng hỗ trợ bạn 24/7"
                </p>
            </section>

            <section class="advisor-card">
                <h2 class="advisor-card__heading">"ĐỘI NGŨ TƯ VẤN VIÊN"</h2>
                <div class="advisor-card__avatar">"👤"</div>
                <h3 class="advisor-card__name">"Ông Lê Minh Quý"</h3>
                <p class="advisor-card__role">"Nghệ nhân Mai Vàng hơn 25 năm kinh nghiệm"</p>
                <div class="advisor-card__actions">
                    <a class="btn btn--primary" href="tel:0922727277">"📞 092 272 7277"</a>
                    <a
                        class="btn btn--chat"
                        href="https://zalo.me/0922727277"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "💬 Chat Zalo"
                    </a>
                </div>
            </section>

            <section class="contact-grid">
                <div class="contact-col">
                    <h3 class="contact-col__heading">"Thông Tin Liên Hệ"</h3>

                    <div class="contact-card">
                        <p class="contact-card__label">"📍 Địa Chỉ Vườn"</p>
                        <p>"56 Đường 882, P. Long Trường, Thành phố Hồ Chí Minh, Việt Nam"</p>
                    </div>

                    <div class="contact-card">
                        <p class="contact-card__label">"📞 Hotline"</p>
                        <a class="contact-card__link" href="tel:0922727277">
                            "0922 727 277: Lê Minh Quý"
                        </a>
                        <a class="contact-card__link" href="tel:0908019236">
                            "0908 019 236: Lê Hoàng Minh Phụng"
                        </a>
                    </div>

                    <div class="contact-card">
                        <p class="contact-card__label">"⏰ Giờ Làm Việc"</p>
                        <p>"Thứ 2 - Chủ Nhật: 7:00 - 18:00"</p>
                    </div>

                    <div class="contact-socials">
                        <a
                            class="contact-socials__btn"
                            href="https://www.facebook.com/vuonmaigocatquan9"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Facebook Vườn Mai Gò Cát"
                        >
                            "f"
                        </a>
                        <a
                            class="contact-socials__btn"
                            href="https://m.me/vuonmaigocatquan9"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Messenger Vườn Mai Gò Cát"
                        >
                            "✉"
                        </a>
                    </div>
                </div>

                <div class="contact-col">
                    <h3 class="contact-col__heading">"Đường Đến Vườn"</h3>
                    <div class="contact-card contact-card--map">
                        <p>
                            "Vườn nằm cách cao tốc Long Thành - Dầu Giây 5 phút, thuận tiện ghé thăm cuối tuần."
                        </p>
                        <a
                            class="btn btn--outline"
                            href=MAPS_URL
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "🗺️ Chỉ đường Google Maps"
                        </a>
                    </div>
                </div>
            </section>
        </div>
    }
}
