use contracts::enums::Category;
use crate::shared::contact_info::{SHOP_ADDRESS, SHOP_EMAIL, SHOP_NAME, SHOP_PHONE};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <h3>"Why People Like Us"</h3>
                    <p>
                        "At The Jhula Craft, we're dedicated to preserving and sharing the intricate art \
                         of swing-making. Our board of experienced craftsmen is here to guide you through \
                         every step of your swing-buying journey."
                    </p>
                    <A href="/products" attr:class="button button--primary">"Order Now"</A>
                </div>
                <div class="footer__column">
                    <h3>"Quick Links"</h3>
                    <ul>
                        <li><A href="/">"Home"</A></li>
                        <li><A href="/about">"About Us"</A></li>
                        <li><A href="/products">"Our Products"</A></li>
                        <li><A href="/contact">"Contact Us"</A></li>
                    </ul>
                </div>
                <div class="footer__column">
                    <h3>"Our Products"</h3>
                    <ul>
                        {Category::all()
                            .into_iter()
                            .map(|category| {
                                view! { <li><A href=category.listing_path()>{category.label()}</A></li> }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer__column">
                    <h3>"Contact Us"</h3>
                    <div class="footer__contact">
                        {icon("map-pin")}
                        <div>
                            <p class="footer__label">"Location"</p>
                            {SHOP_ADDRESS.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                        </div>
                    </div>
                    <div class="footer__contact">
                        {icon("mail")}
                        <div>
                            <p class="footer__label">"Mail"</p>
                            <p>{SHOP_EMAIL}</p>
                        </div>
                    </div>
                    <div class="footer__contact">
                        {icon("phone")}
                        <div>
                            <p class="footer__label">"Phone"</p>
                            <p>{SHOP_PHONE}</p>
                        </div>
                    </div>
                </div>
            </div>
            <div class="footer__bottom">
                <p>{format!("© 2023 {} | DEVELOPED BY ADVANCE TECHNOLOGIES", SHOP_NAME)}</p>
            </div>
        </footer>
    }
}
