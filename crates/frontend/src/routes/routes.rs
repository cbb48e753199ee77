use crate::domain::catalog::ui::details::ProductDetailsPage;
use crate::domain::catalog::ui::list::ProductsPage;
use crate::domain::inquiry::ui::form::ContactPage;
use crate::layout::Shell;
use crate::pages::about::AboutPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/product/:id") view=ProductDetailsPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Shell>
        </Router>
    }
}
