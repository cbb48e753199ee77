use contracts::domain::a002_review::MAX_RATING;
use leptos::prelude::*;

/// Read-only row of stars; partial stars round down
#[component]
pub fn StarRating(rating: f32, #[prop(optional)] show_value: bool) -> impl IntoView {
    let filled = rating.floor().clamp(0.0, MAX_RATING as f32) as u8;

    view! {
        <span class="star-rating" aria-label=format!("Rated {:.1} out of {}", rating, MAX_RATING)>
            {(1..=MAX_RATING)
                .map(|star| {
                    let class = if star <= filled { "star star--filled" } else { "star" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
            {show_value.then(|| view! { <span class="star-rating__value">{format!("{:.1}", rating)}</span> })}
        </span>
    }
}
