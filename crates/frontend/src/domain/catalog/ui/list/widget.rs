use super::quick_view::QuickViewModal;
use super::state::CatalogController;
use crate::shared::components::{PaginationControls, StarRating};
use crate::shared::icons::icon;
use crate::shared::url_query::listing_url;
use contracts::domain::a001_product::{Catalog, Product};
use contracts::enums::{Category, GridDensity, SortMode};
use contracts::usecases::u101_catalog_query::{CatalogPage, PAGE_SIZE};
use contracts::usecases::u102_catalog_view::CatalogEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let query = use_query_map();
    let initial = query.with_untracked(|q| q.get("category"));
    let controller = CatalogController::new(initial.as_deref());
    let state = controller.state();

    // Переход по ссылке с другим ?category= при открытой странице
    Effect::new(move |prev: Option<Option<String>>| {
        let category = query.with(|q| q.get("category"));
        if prev.is_some() {
            controller.dispatch(CatalogEvent::UrlCategoryChanged(category.clone()));
        }
        category
    });

    // Смена категории в сайдбаре идёт через роутер, иначе его ?category= устаревает
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(category) = controller.synced_category().get() {
            navigate(
                &listing_url(category),
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            );
        }
    });

    let page = Memo::new(move |_| state.with(|s| s.page_view(Catalog::global())));
    let quick_view_open = Memo::new(move |_| state.with(|s| s.quick_view.is_some()));

    view! {
        <section class="page catalog">
            <aside class="catalog__sidebar">
                <CatalogSidebar controller=controller />
            </aside>
            <div class="catalog__main">
                <div class="catalog__toolbar">
                    <h2 class="catalog__title">{move || state.with(|s| s.category.label())}</h2>
                    <span class="catalog__count">
                        {move || page.with(|p| format!("Showing {} of {}", p.showing_count(), p.filtered_count))}
                    </span>
                    <SortSelect controller=controller />
                </div>
                {move || {
                    if state.with(|s| s.is_switching()) {
                        view! { <SkeletonGrid /> }.into_any()
                    } else if page.with(|p| p.is_empty()) {
                        view! { <p class="catalog__empty">"No products found."</p> }.into_any()
                    } else {
                        view! { <ProductGrid controller=controller page=page /> }.into_any()
                    }
                }}
                <Show when=move || !state.with(|s| s.is_switching()) && page.with(|p| p.show_pagination())>
                    <PaginationControls
                        current_page=Signal::derive(move || page.with(|p| p.page))
                        total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                        on_page_change=Callback::new(move |n: usize| controller.dispatch(CatalogEvent::SetPage(n as i64)))
                        on_prev=Callback::new(move |_| controller.dispatch(CatalogEvent::PrevPage))
                        on_next=Callback::new(move |_| controller.dispatch(CatalogEvent::NextPage))
                    />
                </Show>
            </div>
            <Show when=move || quick_view_open.get()>
                <QuickViewModal controller=controller />
            </Show>
        </section>
    }
}

#[component]
fn CatalogSidebar(controller: CatalogController) -> impl IntoView {
    let state = controller.state();
    // Во время переключения подсвечиваем уже выбранную категорию
    let highlighted = move || {
        state.with(|s| s.pending_switch.map(|p| p.target).unwrap_or(s.category))
    };

    view! {
        <div class="sidebar-block">
            <label class="sidebar-block__title" for="catalog-search">"Search"</label>
            <div class="search-input">
                {icon("search")}
                <input
                    id="catalog-search"
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| controller.dispatch(CatalogEvent::Search(event_target_value(&ev)))
                />
            </div>
        </div>
        <div class="sidebar-block">
            <h3 class="sidebar-block__title">"Categories"</h3>
            <ul class="category-list">
                {Category::all()
                    .into_iter()
                    .map(|category| {
                        view! {
                            <li>
                                <button
                                    class="category-list__item"
                                    class:category-list__item--active=move || highlighted() == category
                                    on:click=move |_| controller.dispatch(CatalogEvent::SelectCategory(category))
                                >
                                    {category.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
        <div class="sidebar-block">
            <h3 class="sidebar-block__title">"View"</h3>
            <div class="grid-toggle">
                {[GridDensity::Three, GridDensity::Four]
                    .into_iter()
                    .map(|grid| {
                        let name = if grid == GridDensity::Three { "grid-3" } else { "grid-4" };
                        view! {
                            <button
                                class="button button--icon"
                                class:button--active=move || state.with(|s| s.grid == grid)
                                title=format!("{} columns", grid.columns())
                                on:click=move |_| controller.dispatch(CatalogEvent::SetGridDensity(grid))
                            >
                                {icon(name)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.show_all)
                    on:change=move |ev| controller.dispatch(CatalogEvent::SetShowAll(event_target_checked(&ev)))
                />
                "Show all products"
            </label>
        </div>
    }
}

#[component]
fn SortSelect(controller: CatalogController) -> impl IntoView {
    let state = controller.state();

    view! {
        <select
            class="sort-select"
            prop:value=move || state.with(|s| s.sort.token())
            on:change=move |ev| {
                if let Some(mode) = SortMode::from_token(&event_target_value(&ev)) {
                    controller.dispatch(CatalogEvent::SetSort(mode));
                }
            }
        >
            {SortMode::all()
                .into_iter()
                .map(|mode| view! { <option value=mode.token()>{mode.label()}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
fn ProductGrid(controller: CatalogController, page: Memo<CatalogPage<'static>>) -> impl IntoView {
    let state = controller.state();
    let grid_class = move || format!("product-grid product-grid--cols-{}", state.with(|s| s.grid.columns()));

    view! {
        <div class=grid_class>
            {move || {
                page.with(|p| {
                    p.items
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(slot, product)| view! { <ProductCard controller=controller product=product slot_index=slot /> })
                        .collect_view()
                })
            }}
        </div>
    }
}

#[component]
fn ProductCard(controller: CatalogController, product: &'static Product, slot_index: usize) -> impl IntoView {
    view! {
        <article class="product-card">
            <A href=product.detail_path() attr:class="product-card__image">
                <img src=product.primary_image().unwrap_or_default() alt=product.name.clone() loading="lazy" />
            </A>
            <button
                class="button button--icon product-card__quick-view"
                title="Quick view"
                on:click=move |_| controller.dispatch(CatalogEvent::OpenQuickView { slot: slot_index })
            >
                {icon("eye")}
            </button>
            <div class="product-card__body">
                <A href=product.detail_path() attr:class="product-card__name">{product.name.clone()}</A>
                {product.price_label().map(|price| view! { <span class="product-card__price">{price}</span> })}
                {product.rating.map(|rating| view! { <StarRating rating=rating /> })}
            </div>
        </article>
    }
}

#[component]
fn SkeletonGrid() -> impl IntoView {
    view! {
        <div class="product-grid product-grid--loading" aria-busy="true">
            {(0..PAGE_SIZE)
                .map(|_| view! { <div class="product-card product-card--skeleton"></div> })
                .collect_view()}
        </div>
    }
}
