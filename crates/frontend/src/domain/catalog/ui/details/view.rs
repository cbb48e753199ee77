use super::reviews::ReviewsTab;
use super::view_model::{DetailTab, ProductDetailsVm};
use crate::shared::api_utils::page_origin;
use crate::shared::components::StarRating;
use crate::shared::contact_info::PRODUCT_HIGHLIGHTS;
use crate::shared::icons::icon;
use crate::shared::notice::NoticeBanner;
use contracts::domain::a001_product::Product;
use contracts::shared::share_links::{whatsapp_interest, ShareLinks, DEFAULT_ORIGIN, SHOP_WHATSAPP};
use contracts::usecases::u103_product_detail::ProductDetail;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ProductDetailsView(detail: ProductDetail<'static>, vm: ProductDetailsVm) -> impl IntoView {
    let product = detail.product;
    let category_link = detail.category_link();
    let breadcrumb_link = category_link.clone();
    let notice = Signal::derive(move || vm.submission.with(|s| s.notice().cloned()));

    view! {
        <NoticeBanner notice=notice />
        <nav class="breadcrumb">
            <A href="/">{icon("arrow-left")}" Home"</A>
            <span>"/"</span>
            <A href=breadcrumb_link>"Products"</A>
            <span>"/"</span>
            <span class="breadcrumb__current">{product.name.clone()}</span>
        </nav>
        <section class="page product-details">
            <div class="product-details__nav">
                {detail.previous.map(|p| view! { <A href=p.detail_path() attr:class="button">"← Previous"</A> })}
                {detail.next.map(|p| view! { <A href=p.detail_path() attr:class="button">"Next →"</A> })}
            </div>
            <div class="product-details__main">
                <Gallery product=product vm=vm />
                <ProductInfo product=product category_link=category_link />
            </div>
            <div class="product-details__tabs">
                <nav class="tabs">
                    <button
                        class="tabs__item"
                        class:tabs__item--active=move || vm.active_tab.get() == DetailTab::Description
                        on:click=move |_| vm.active_tab.set(DetailTab::Description)
                    >
                        "Description"
                    </button>
                    <button
                        class="tabs__item"
                        class:tabs__item--active=move || vm.active_tab.get() == DetailTab::Reviews
                        on:click=move |_| vm.active_tab.set(DetailTab::Reviews)
                    >
                        {move || format!("Reviews ({})", vm.reviews.with(|r| r.len()))}
                    </button>
                </nav>
                {move || match vm.active_tab.get() {
                    DetailTab::Description => view! {
                        <div class="tabs__panel product-details__description">
                            {product.paragraphs().map(|para| view! { <p>{para.to_string()}</p> }).collect_view()}
                        </div>
                    }
                    .into_any(),
                    DetailTab::Reviews => view! { <ReviewsTab product=product vm=vm /> }.into_any(),
                }}
            </div>
            <RelatedProducts related=detail.related.clone() />
        </section>
    }
}

#[component]
fn Gallery(product: &'static Product, vm: ProductDetailsVm) -> impl IntoView {
    let main_src = move || {
        let index = vm.main_image.get();
        product
            .images
            .get(index)
            .or_else(|| product.images.first())
            .cloned()
            .unwrap_or_default()
    };

    view! {
        <div class="gallery">
            <div class="gallery__thumbs">
                {product
                    .images
                    .iter()
                    .enumerate()
                    .map(|(idx, src)| {
                        view! {
                            <button
                                class="gallery__thumb"
                                class:gallery__thumb--active=move || vm.main_image.get() == idx
                                on:click=move |_| vm.main_image.set(idx)
                            >
                                <img src=src.clone() alt=format!("{} {}", product.name, idx + 1) />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <img class="gallery__main" src=main_src alt=product.name.clone() />
        </div>
    }
}

#[component]
fn ProductInfo(product: &'static Product, category_link: String) -> impl IntoView {
    let origin = page_origin().unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
    let image = product.primary_image().map(|src| format!("{}{}", origin, src));
    let share = ShareLinks::new(&origin, product.id, &product.name, image.as_deref());

    view! {
        <div class="product-info">
            <h1>{product.name.clone()}</h1>
            {product.price_label().map(|price| view! { <p class="product-info__price">{price}</p> })}
            {product.rating.map(|rating| view! { <StarRating rating=rating show_value=true /> })}
            <p class="product-info__short">{product.short_description.clone()}</p>
            <ul class="product-info__highlights">
                {PRODUCT_HIGHLIGHTS.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
            </ul>
            <div class="product-info__cta">
                <a class="button button--whatsapp" href=SHOP_WHATSAPP target="_blank" rel="noopener noreferrer">
                    {icon("message")}" Chat on WhatsApp"
                </a>
                <A href="/contact" attr:class="button">"Contact Us"</A>
            </div>
            <p class="product-info__meta">
                <span class="product-info__label">"Category: "</span>
                <A href=category_link>{product.category.label()}</A>
            </p>
            {product.sku.clone().map(|sku| view! {
                <p class="product-info__meta">
                    <span class="product-info__label">"SKU: "</span>{sku}
                </p>
            })}
            {(!product.tags.is_empty()).then(|| view! {
                <p class="product-info__meta">
                    <span class="product-info__label">"Tags: "</span>{product.tags.join(", ")}
                </p>
            })}
            <div class="product-info__share">
                <span class="product-info__label">{icon("share")}" Share:"</span>
                <a class="share share--facebook" href=share.facebook target="_blank" rel="noopener noreferrer">"Facebook"</a>
                <a class="share share--twitter" href=share.twitter target="_blank" rel="noopener noreferrer">"Twitter"</a>
                <a class="share share--pinterest" href=share.pinterest target="_blank" rel="noopener noreferrer">"Pinterest"</a>
                <a class="share share--linkedin" href=share.linkedin target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                <a class="share share--whatsapp" href=share.whatsapp target="_blank" rel="noopener noreferrer">"WhatsApp"</a>
            </div>
        </div>
    }
}

#[component]
fn RelatedProducts(related: Vec<&'static Product>) -> impl IntoView {
    view! {
        <section class="related">
            <h2 class="section-title">"Related products"</h2>
            <div class="product-grid product-grid--cols-3">
                {related
                    .into_iter()
                    .map(|product| {
                        view! {
                            <article class="product-card">
                                <A href=product.detail_path() attr:class="product-card__image">
                                    <img src=product.primary_image().unwrap_or_default() alt=product.name.clone() loading="lazy" />
                                </A>
                                <div class="product-card__body">
                                    <A href=product.detail_path() attr:class="product-card__name">{product.name.clone()}</A>
                                    {product.price_label().map(|price| view! { <span class="product-card__price">{price}</span> })}
                                    <a class="button button--whatsapp" href=whatsapp_interest(&product.name) target="_blank" rel="noopener noreferrer">
                                        "Buy"
                                    </a>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
