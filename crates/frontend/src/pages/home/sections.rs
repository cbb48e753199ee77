//! Landing page sections.

use crate::shared::components::StarRating;
use contracts::domain::a001_product::{Catalog, Product};
use contracts::enums::Category;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const BEST_SELLER_COUNT: usize = 3;

/// Made-to-order cards; each leads to the full catalog
const ON_DEMAND_IMAGES: [&str; 6] = [
    "/assets/acrylic-swing.jpg",
    "/assets/carved-swing.jpg",
    "/assets/outdoor-swing.jpg",
    "/assets/single-swing.jpg",
    "/assets/acrylic-swing.jpg",
    "/assets/carved-swing.jpg",
];
const ON_DEMAND_TITLE: &str = "MACHHU TEAK WOOD";

/// Highest rated products, ties broken by catalog order
fn best_sellers(catalog: &Catalog, count: usize) -> Vec<&Product> {
    let mut items: Vec<&Product> = catalog.products().filter(|p| p.rating.is_some()).collect();
    items.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
    items.truncate(count);
    items
}

/// One product per category, for the first `count` categories
fn collection_heads(catalog: &Catalog, count: usize) -> Vec<&Product> {
    Category::all()
        .into_iter()
        .filter_map(|c| catalog.find_by_category(c).first())
        .take(count)
        .collect()
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <section class="hero">
            <img class="hero__image" src="/HERO.jpg" alt="Outdoor Swing Jhula" />
            <div class="hero__content">
                <span class="hero__pill">"Classic & Latest"</span>
                <h1 class="hero__title">"TRENDING"<br /><span>"NEW DESIGNS"</span></h1>
                <p class="hero__subtitle">"Outdoor Swing Jhula"</p>
                <button
                    class="button button--primary"
                    on:click=move |_| navigate("/products", Default::default())
                >
                    "ORDER NOW"
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn CategoriesSection() -> impl IntoView {
    let catalog = Catalog::global();

    view! {
        <section class="section categories">
            <h2 class="section-title">"Our Categories"</h2>
            <div class="categories__grid">
                {Category::all()
                    .into_iter()
                    .map(|category| {
                        let image = catalog
                            .find_by_category(category)
                            .first()
                            .and_then(|p| p.primary_image())
                            .unwrap_or_default()
                            .to_string();
                        view! {
                            <A href=category.listing_path() attr:class="category-card">
                                <img src=image alt=category.label() />
                                <span class="category-card__label">{category.label().to_uppercase()}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn BestSellersSection() -> impl IntoView {
    let items = best_sellers(Catalog::global(), BEST_SELLER_COUNT);

    view! {
        <section class="section best-sellers">
            <h2 class="section-title">"Best-Sellers of the season"</h2>
            <div class="best-sellers__grid">
                {items
                    .into_iter()
                    .map(|product| {
                        view! {
                            <A href=product.detail_path() attr:class="product-card">
                                <img src=product.primary_image().unwrap_or_default().to_string() alt=product.name.clone() />
                                <div class="product-card__body">
                                    <StarRating rating=product.rating.unwrap_or_default() show_value=true />
                                    <h3>{product.name.clone()}</h3>
                                    <p>{product.short_description.clone()}</p>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn PromoSection() -> impl IntoView {
    view! {
        <section class="section promo">
            <img class="promo__image" src="/assets/hero-swing.jpg" alt="JhulaCraft Premium Swing" />
            <div class="promo__content">
                <h2>"DEAL THAT MAKE"<br /><span>"YOU DROOL !"</span></h2>
                <A href="/products" attr:class="button button--primary">"SHOP NOW"</A>
            </div>
        </section>
    }
}

#[component]
pub fn SpecificationsSection() -> impl IntoView {
    let details = [
        ("/assets/swing-hardware.jpg", "Swing Hardware 1"),
        ("/assets/outdoor-swing.jpg", "Swing Hardware 2"),
        ("/assets/swing-hardware.jpg", "Swing Hardware 3"),
        ("/assets/outdoor-swing.jpg", "Swing Hardware 4"),
    ];

    view! {
        <section class="section specifications">
            <h2 class="section-title">"The specifications"</h2>
            <div class="specifications__layout">
                <img class="specifications__main" src="/assets/acrylic-swing.jpg" alt="Swing" />
                <div class="specifications__grid">
                    {details
                        .into_iter()
                        .map(|(src, alt)| view! { <img src=src alt=alt /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn OnDemandSection() -> impl IntoView {
    view! {
        <section class="section on-demand">
            <h2 class="section-title">"On Demand Products"</h2>
            <div class="on-demand__grid">
                {ON_DEMAND_IMAGES
                    .into_iter()
                    .map(|src| {
                        view! {
                            <A href="/products" attr:class="product-card on-demand__card">
                                <span class="badge">"ON DEMAND"</span>
                                <img src=src alt=ON_DEMAND_TITLE />
                                <h3>{ON_DEMAND_TITLE}</h3>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="on-demand__footer">
                <A href="/products" attr:class="button button--primary">"Show All"</A>
            </div>
        </section>
    }
}

#[component]
pub fn FeatureCollectionsSection() -> impl IntoView {
    let items = collection_heads(Catalog::global(), 4);

    view! {
        <section class="section collections">
            <h2 class="section-title">"Feature Collections"</h2>
            <div class="collections__grid">
                {items
                    .into_iter()
                    .map(|product| {
                        view! {
                            <div class="product-card">
                                <span class="badge">"NEW"</span>
                                <img src=product.primary_image().unwrap_or_default().to_string() alt=product.name.clone() />
                                <A href=product.category.listing_path() attr:class="button button--primary">
                                    "View Collection"
                                </A>
                                <h3>{product.category.label()}</h3>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="collections__footer">
                <A href="/products" attr:class="button button--primary">"SHOP NOW"</A>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_sellers_are_top_rated() {
        let items = best_sellers(Catalog::global(), 3);
        assert_eq!(items.len(), 3);
        let top = items[0].rating.unwrap();
        assert!(Catalog::global()
            .products()
            .all(|p| p.rating.unwrap_or_default() <= top));
        assert!(items.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_on_demand_cards_use_shipped_assets() {
        assert_eq!(ON_DEMAND_IMAGES.len(), 6);
        assert!(ON_DEMAND_IMAGES
            .iter()
            .all(|src| src.starts_with("/assets/") && src.ends_with(".jpg")));
    }

    #[test]
    fn test_collection_heads_cover_distinct_categories() {
        let items = collection_heads(Catalog::global(), 4);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].category, Category::AcrylicSwing);
        assert_eq!(items[1].category, Category::CarvingSwing);
    }
}
