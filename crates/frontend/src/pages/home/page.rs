use super::sections::{
    BestSellersSection, CategoriesSection, FeatureCollectionsSection, HeroSection, OnDemandSection,
    PromoSection, SpecificationsSection,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <HeroSection />
            <CategoriesSection />
            <BestSellersSection />
            <PromoSection />
            <SpecificationsSection />
            <OnDemandSection />
            <FeatureCollectionsSection />
        </div>
    }
}
