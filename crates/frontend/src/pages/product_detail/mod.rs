use crate::layout::global_context::{use_app_context, AppPage};
use crate::shared::components::product_card::{FallbackImg, ProductCard};
use crate::shared::format::format_vnd;
use catalog::{products, Product, FALLBACK_IMAGE};
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Specs,
    Care,
}

/// Main image plus ordered, deduplicated thumbnails; never empty.
fn gallery_images(product: &Product) -> Vec<String> {
    let mut images = Vec::new();
    for src in std::iter::once(&product.image).chain(product.thumbnails.iter()) {
        let src = src.trim();
        if !src.is_empty() && !images.iter().any(|s| s == src) {
            images.push(src.to_string());
        }
    }
    if images.is_empty() {
        images.push(FALLBACK_IMAGE.to_string());
    }
    images
}

#[component]
pub fn ProductDetailPage(product: Product) -> impl IntoView {
    let ctx = use_app_context();

    // Selecting a related product swaps the `product` prop, which recreates
    // this component and thereby resets the gallery and tab state.
    let gallery = gallery_images(&product);
    let (main_image, set_main_image) = signal(gallery[0].clone());
    let (active_tab, set_active_tab) = signal(DetailTab::Specs);

    let related: Vec<Product> = products()
        .iter()
        .filter(|p| p.id != product.id)
        .take(4)
        .cloned()
        .collect();

    view! {
        <div class="page page--detail">
            <nav class="breadcrumbs">
                <button class="breadcrumbs__link" on:click=move |_| ctx.navigate(AppPage::Home)>
                    "Trang chủ"
                </button>
                <span class="breadcrumbs__sep">"/"</span>
                <button
                    class="breadcrumbs__link"
                    on:click=move |_| ctx.navigate(AppPage::Products)
                >
                    "Sản phẩm"
                </button>
                <span class="breadcrumbs__sep">"/"</span>
                <span class="breadcrumbs__current">{product.name.clone()}</span>
            </nav>

            <section class="detail-card">
                <div class="detail-gallery">
                    <div class="detail-gallery__main">
                        {move || {
                            view! {
                                <FallbackImg
                                    src=main_image.get()
                                    alt="Ảnh sản phẩm"
                                    class="detail-gallery__img"
                                />
                            }
                        }}
                    </div>
                    <div class="detail-gallery__thumbs">
                        {gallery
                            .iter()
                            .map(|src| {
                                let src = src.clone();
                                let select = {
                                    let src = src.clone();
                                    move |_| set_main_image.set(src.clone())
                                };
                                let is_current = {
                                    let src = src.clone();
                                    move || main_image.get() == src
                                };
                                view! {
                                    <button
                                        class=move || {
                                            if is_current() {
                                                "detail-gallery__thumb detail-gallery__thumb--active"
                                            } else {
                                                "detail-gallery__thumb"
                                            }
                                        }
                                        on:click=select
                                    >
                                        <FallbackImg src=src alt="Ảnh phụ" class="detail-gallery__thumb-img" />
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="detail-info">
                    <p class="detail-info__code">"Mã sản phẩm: " {product.id.clone()}</p>
                    <h1 class="detail-info__name">{product.name.clone()}</h1>
                    <span class="detail-info__category">{product.category.clone()}</span>
                    <p class="detail-info__description">{product.description.clone()}</p>

                    <div class="detail-prices">
                        <div class="detail-prices__row">
                            <p class="detail-prices__label">"Giá cho thuê (5 - 10 ngày)"</p>
                            <p class="detail-prices__rent">{format_vnd(product.rent_price)}</p>
                            {product
                                .rent_price
                                .is_none()
                                .then(|| {
                                    view! {
                                        <p class="detail-prices__hint">
                                            "✨ Liên hệ để nhận báo giá chi tiết và ưu đãi đặc biệt"
                                        </p>
                                    }
                                })}
                        </div>
                        <div class="detail-prices__row">
                            <p class="detail-prices__label">"Giá bán sở hữu"</p>
                            <p class="detail-prices__sale">{format_vnd(product.price)}</p>
                            {product
                                .price
                                .is_none()
                                .then(|| {
                                    view! {
                                        <p class="detail-prices__hint">
                                            "✨ Liên hệ để nhận báo giá chi tiết và ưu đãi đặc biệt"
                                        </p>
                                    }
                                })}
                        </div>
                    </div>

                    <div class="detail-actions">
                        <button
                            class="btn btn--accent btn--block"
                            on:click=move |_| ctx.navigate(AppPage::Booking)
                        >
                            "Đặt Lịch Xem Trực Tiếp"
                        </button>
                        <a class="btn btn--outline btn--block" href="tel:0922727277">
                            "Gọi Tư Vấn: 092 272 7277"
                        </a>
                    </div>

                    <div class="detail-perks">
                        <div class="detail-perks__item">
                            <p class="detail-perks__title">"🚚 Vận Chuyển An Toàn"</p>
                            <p class="detail-perks__note">"Đội ngũ chuyên nghiệp"</p>
                        </div>
                        <div class="detail-perks__item">
                            <p class="detail-perks__title">"🎧 Hỗ Trợ 24/7"</p>
                            <p class="detail-perks__note">"Tư vấn tận tâm"</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="detail-tabs">
                <div class="detail-tabs__header">
                    <button
                        class=move || {
                            if active_tab.get() == DetailTab::Specs {
                                "detail-tabs__btn detail-tabs__btn--active"
                            } else {
                                "detail-tabs__btn"
                            }
                        }
                        on:click=move |_| set_active_tab.set(DetailTab::Specs)
                    >
                        "Thông Số"
                    </button>
                    <button
                        class=move || {
                            if active_tab.get() == DetailTab::Care {
                                "detail-tabs__btn detail-tabs__btn--active"
                            } else {
                                "detail-tabs__btn"
                            }
                        }
                        on:click=move |_| set_active_tab.set(DetailTab::Care)
                    >
                        "Hướng Dẫn Chăm Sóc"
                    </button>
                </div>

                {
                    let height = product.height.clone();
                    let width = product.width.clone();
                    move || match active_tab.get() {
                        DetailTab::Specs => {
                            view! {
                                <div class="detail-specs">
                                    <div class="detail-specs__row">
                                        <span>"Chiều cao"</span>
                                        <span>{height.clone().unwrap_or_else(|| "---".into())}</span>
                                    </div>
                                    <div class="detail-specs__row">
                                        <span>"Tán / ngang"</span>
                                        <span>{width.clone().unwrap_or_else(|| "---".into())}</span>
                                    </div>
                                    <div class="detail-specs__row">
                                        <span>"Số cánh hoa"</span>
                                        <span>"8 - 15 cánh"</span>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        DetailTab::Care => {
                            view! {
                                <div class="detail-care">
                                    <div class="detail-care__block">
                                        <p class="detail-care__heading">"💧 Tưới Nước"</p>
                                        <ul>
                                            <li>"Tưới 1 lần/ngày vào buổi trưa."</li>
                                            <li>
                                                "Tưới đều vào bầu đất trong chậu, không tưới trực tiếp lên hoa."
                                            </li>
                                            <li>
                                                "Tưới đúng cách giúp hoa nở tươi lâu, hạn chế rụng hoa."
                                            </li>
                                        </ul>
                                    </div>
                                    <div class="detail-care__block">
                                        <p class="detail-care__heading detail-care__heading--warn">
                                            "⚠️ Lưu ý quan trọng"
                                        </p>
                                        <ul>
                                            <li>"Không tưới nước nóng, nước đá."</li>
                                            <li>
                                                "Không tưới bia, rượu hoặc các loại hóa chất khác vì sẽ ảnh hưởng xấu đến cây mai."
                                            </li>
                                        </ul>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    }
                }
            </section>

            <section class="detail-related">
                <h2 class="detail-related__title">"Bạn Cũng Có Thể Thích"</h2>
                <div class="detail-related__grid">
                    {related
                        .into_iter()
                        .map(|p| view! { <ProductCard product=p /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
