mod state;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::product_card::ProductCard;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use catalog::filter::{category_options, run_query, ALL_CATEGORIES};
use catalog::{products, HeightRange, PriceRange};
use leptos::prelude::*;
use state::{create_state, ListState};

#[component]
pub fn ProductListPage() -> impl IntoView {
    let state = create_state();

    let page_data = Memo::new(move |_| run_query(products(), &state.get().to_query()));

    let on_search = Callback::new(move |q: String| state.update(|s| s.set_search(q)));
    let on_page = Callback::new(move |p: usize| state.update(|s| s.set_page(p)));

    view! {
        <div class="page page--products">
            <section class="page-banner page-banner--products">
                <h1 class="page-banner__title">"Sản Phẩm Mai Tết"</h1>
                <p class="page-banner__subtitle">
                    "Khám phá bộ sưu tập mai đa dạng, chất lượng cao"
                </p>
            </section>

            <div class="products-layout">
                <FilterSidebar state=state />

                <div class="products-main">
                    <div class="products-toolbar">
                        <SearchInput
                            value=Signal::derive(move || state.get().search)
                            on_change=on_search
                            placeholder="Tìm kiếm mã/tên sản phẩm..."
                        />
                        <p class="products-toolbar__count">
                            {move || format!("{} sản phẩm", page_data.get().total_count)}
                        </p>
                    </div>

                    <div class="products-grid">
                        <For
                            each=move || page_data.get().items
                            key=|p| p.id.clone()
                            children=move |product| view! { <ProductCard product=product /> }
                        />
                    </div>

                    <ConsultBox />

                    {move || {
                        (page_data.get().total_pages > 1)
                            .then(|| {
                                view! {
                                    <PaginationControls
                                        current_page=Signal::derive(move || page_data.get().page)
                                        total_pages=Signal::derive(move || {
                                            page_data.get().total_pages
                                        })
                                        on_page_change=on_page
                                    />
                                }
                            })
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn FilterSidebar(state: RwSignal<ListState>) -> impl IntoView {
    // Options come from the loaded catalog, not a hardcoded list.
    let categories = category_options(products());

    view! {
        <aside class="filter-panel">
            <h3 class="filter-panel__title">{icon("filter")}<span>" Bộ Lọc"</span></h3>

            <div class="filter-panel__group">
                <label class="filter-panel__label">"Loại Mai"</label>
                <div class="filter-panel__options">
                    {categories
                        .into_iter()
                        .map(|cat| {
                            let label = if cat == ALL_CATEGORIES {
                                "Tất cả".to_string()
                            } else {
                                cat.clone()
                            };
                            let is_active = {
                                let cat = cat.clone();
                                move || state.get().category == cat
                            };
                            let select = move |_| {
                                state.update(|s| s.set_category(cat.clone()));
                            };
                            view! {
                                <button
                                    class=move || {
                                        if is_active() {
                                            "filter-chip filter-chip--active"
                                        } else {
                                            "filter-chip"
                                        }
                                    }
                                    on:click=select
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="filter-panel__group">
                <label class="filter-panel__label">"Mức Giá"</label>
                <div class="filter-panel__options">
                    {PriceRange::OPTIONS
                        .into_iter()
                        .map(|range| {
                            view! {
                                <button
                                    class=move || {
                                        if state.get().price == range {
                                            "filter-chip filter-chip--active"
                                        } else {
                                            "filter-chip"
                                        }
                                    }
                                    on:click=move |_| state.update(|s| s.set_price(range))
                                >
                                    {range.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="filter-panel__group">
                <label class="filter-panel__label">"Chiều cao"</label>
                <div class="filter-panel__options filter-panel__options--grid">
                    {HeightRange::OPTIONS
                        .into_iter()
                        .map(|range| {
                            view! {
                                <button
                                    class=move || {
                                        if state.get().height == range {
                                            "filter-chip filter-chip--active"
                                        } else {
                                            "filter-chip"
                                        }
                                    }
                                    on:click=move |_| state.update(|s| s.set_height(range))
                                >
                                    {range.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <button class="filter-panel__reset" on:click=move |_| state.update(|s| s.reset())>
                "Reset bộ lọc"
            </button>
        </aside>
    }
}

/// Invitation to call when the grid does not show a suitable tree.
#[component]
fn ConsultBox() -> impl IntoView {
    view! {
        <div class="consult-box">
            <div class="consult-box__text">
                <p class="consult-box__headline">"Bạn chưa tìm được cây phù hợp?"</p>
                <p>"🌼 Nhà vườn còn nhiều cây chưa đăng đủ thông tin."</p>
                <p>"👉 Gọi ngay để được dẫn xem cây đúng ngân sách & không gian của bạn."</p>
            </div>
            <a class="btn btn--accent" href="tel:0922727277">"📞 Gọi Ngay"</a>
        </div>
    }
}
