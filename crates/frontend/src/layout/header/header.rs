use crate::shared::contact_info::{INSTAGRAM_URL, SHOP_EMAIL, SHOP_PHONE, YOUTUBE_URL};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("About Us", "/about"),
    ("Our Products", "/products"),
    ("Contact Us", "/contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let close_menu = move |_| menu_open.set(false);

    view! {
        <header data-zone="header" class="header">
            <div class="header__top-bar">
                <span class="header__order">"ORDER NOW"</span>
                <span class="header__contact">{icon("mail")}<span>{SHOP_EMAIL}</span></span>
                <span class="header__contact">{icon("phone")}<span>{SHOP_PHONE}</span></span>
                <a href=YOUTUBE_URL target="_blank" rel="noopener noreferrer">"YouTube"</a>
                <a href=INSTAGRAM_URL target="_blank" rel="noopener noreferrer">"Instagram"</a>
            </div>
            <nav class="header__nav">
                <A href="/" attr:class="header__logo">
                    <img src="/Logo.png" alt="JhulaCraft Logo" />
                </A>
                <div class="header__links">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, path)| view! { <A href=*path attr:class="header__link">{*name}</A> })
                        .collect_view()}
                    <A href="/products" attr:class="button button--primary">"ORDER NOW"</A>
                </div>
                <button
                    class="button button--icon header__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="header__mobile-menu" on:click=close_menu>
                    {NAV_LINKS
                        .iter()
                        .map(|(name, path)| view! { <A href=*path attr:class="header__mobile-link">{*name}</A> })
                        .collect_view()}
                    <A href="/products" attr:class="button button--primary">"ORDER NOW"</A>
                </div>
            </Show>
        </header>
    }
}
