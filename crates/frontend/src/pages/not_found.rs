use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--centered">
            <h2>"Page not found"</h2>
            <p>
                "The page you requested doesn't exist. "
                <A href="/products">"Back to products"</A>
            </p>
        </section>
    }
}
