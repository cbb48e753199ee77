use super::state::CatalogController;
use crate::shared::components::StarRating;
use crate::shared::modal::Modal;
use contracts::domain::a001_product::Catalog;
use contracts::shared::share_links::whatsapp_interest;
use contracts::usecases::u102_catalog_view::CatalogEvent;
use leptos::prelude::*;
use leptos_router::components::A;

/// Окно быстрого просмотра товара из сетки
#[component]
pub fn QuickViewModal(controller: CatalogController) -> impl IntoView {
    let state = controller.state();
    let product = Memo::new(move |_| state.with(|s| s.quick_view_product(Catalog::global())));
    let close = Callback::new(move |_| controller.dispatch(CatalogEvent::CloseQuickView));
    let title = Signal::derive(move || product.with(|p| p.map(|p| p.name.clone()).unwrap_or_default()));

    view! {
        <Modal title=title on_close=close>
            {move || {
                product.get().map(|product| {
                    view! {
                        <div class="quick-view">
                            <img class="quick-view__image" src=product.primary_image().unwrap_or_default() alt=product.name.clone() />
                            <div class="quick-view__info">
                                <span class="quick-view__category">{product.category.label()}</span>
                                {product.price_label().map(|price| view! { <p class="quick-view__price">{price}</p> })}
                                {product.rating.map(|rating| view! { <StarRating rating=rating show_value=true /> })}
                                <p>{product.short_description.clone()}</p>
                                {product.sku.clone().map(|sku| view! { <p class="quick-view__sku">"SKU: "{sku}</p> })}
                                <div class="quick-view__actions">
                                    <A href=product.detail_path() attr:class="button button--primary">
                                        "View details"
                                    </A>
                                    <a class="button button--whatsapp" href=whatsapp_interest(&product.name) target="_blank" rel="noopener noreferrer">
                                        "Enquire on WhatsApp"
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                })
            }}
        </Modal>
    }
}
