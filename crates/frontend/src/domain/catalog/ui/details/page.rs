use super::view::ProductDetailsView;
use super::view_model::ProductDetailsVm;
use contracts::domain::a001_product::Catalog;
use contracts::usecases::u103_product_detail::resolve;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let raw_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let detail = Memo::new(move |_| raw_id.with(|id| resolve(Catalog::global(), id)));
    let vm = ProductDetailsVm::new();

    // Смена товара без размонтирования страницы (prev/next, похожие)
    Effect::new(move |prev: Option<String>| {
        let id = raw_id.get();
        if prev.is_some() {
            vm.reset();
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
        id
    });

    view! {
        {move || match detail.get() {
            Some(detail) => view! { <ProductDetailsView detail=detail vm=vm /> }.into_any(),
            None => view! { <ProductNotFound /> }.into_any(),
        }}
    }
}

#[component]
fn ProductNotFound() -> impl IntoView {
    view! {
        <section class="page page--centered">
            <h2>"Product not found"</h2>
            <p>
                "The product you requested doesn't exist. "
                <A href="/products">"Back to products"</A>
            </p>
        </section>
    }
}
