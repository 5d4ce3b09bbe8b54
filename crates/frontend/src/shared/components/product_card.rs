use crate::layout::global_context::use_app_context;
use crate::shared::format::format_vnd;
use catalog::{Product, FALLBACK_IMAGE};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Image that swaps in the placeholder when its source fails to load.
#[component]
pub fn FallbackImg(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            class=class
            loading="lazy"
            on:error=move |ev| {
                let Some(img) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok()) else {
                    return;
                };
                // Guard against an error loop if the placeholder itself 404s.
                if !img.src().ends_with(FALLBACK_IMAGE) {
                    img.set_src(FALLBACK_IMAGE);
                }
            }
        />
    }
}

/// Card in the product grid: photo, category badge, name, rental price and
/// a detail button.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();

    let open_detail = {
        let product = product.clone();
        move |_| ctx.open_product(product.clone())
    };

    view! {
        <article class="product-card">
            <div class="product-card__media">
                <FallbackImg
                    src=product.image.clone()
                    alt=product.name.clone()
                    class="product-card__img"
                />
                <span class="product-card__badge">{product.category.clone()}</span>
            </div>

            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>

                <div class="product-card__footer">
                    <div>
                        <p class="product-card__price-label">"Giá thuê (5 - 10 ngày)"</p>
                        <p class="product-card__price">{format_vnd(product.rent_price)}</p>
                    </div>
                    <button class="btn btn--primary" on:click=open_detail>"Chi Tiết"</button>
                </div>
            </div>
        </article>
    }
}
