use super::view_model::ProductDetailsVm;
use crate::shared::icons::icon;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_review::{MAX_RATING, SAMPLE_COMMENTS};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ReviewsTab(product: &'static Product, vm: ProductDetailsVm) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_review(product);
    };
    let pending = move || vm.submission.with(|s| s.is_pending());

    view! {
        <div class="tabs__panel reviews">
            <div class="reviews__list">
                {move || {
                    vm.reviews.with(|reviews| {
                        if reviews.is_empty() {
                            return view! { <p class="reviews__empty">"There are no reviews yet."</p> }.into_any();
                        }
                        reviews
                            .iter()
                            .map(|r| {
                                view! {
                                    <div class="review">
                                        <div class="review__header">
                                            <strong>{r.name.clone()}</strong>
                                            <span class="review__date">{r.date.format("%d %b %Y").to_string()}</span>
                                        </div>
                                        <span class="review__stars">{r.stars()}</span>
                                        <p class="review__comment">{r.comment.clone()}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    })
                }}
            </div>

            <form class="review-form" on:submit=on_submit>
                <h3>{format!("Add a review for “{}”", product.name)}</h3>
                <label class="form-label">"Your rating *"</label>
                <div class="rating-input">
                    {(1..=MAX_RATING)
                        .map(|value| {
                            view! {
                                <button
                                    type="button"
                                    class="rating-input__star"
                                    class:rating-input__star--active=move || vm.draft.with(|d| d.rating >= value)
                                    aria-label=format!("{} star", value)
                                    on:click=move |_| vm.set_rating(value)
                                >
                                    "★"
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <label class="form-label" for="review-comment">"Your review *"</label>
                <textarea
                    id="review-comment"
                    rows="4"
                    placeholder="Write your review here..."
                    prop:value=move || vm.draft.with(|d| d.comment.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.draft.update(|d| d.comment = value);
                    }
                ></textarea>

                <div class="review-form__samples">
                    <select
                        prop:value=move || vm.sample.get()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if !value.is_empty() {
                                vm.choose_sample(value);
                            }
                        }
                    >
                        <option value="">"Sample comments"</option>
                        {SAMPLE_COMMENTS
                            .iter()
                            .map(|s| view! { <option value=*s>{*s}</option> })
                            .collect_view()}
                    </select>
                    <button
                        type="button"
                        class="button button--icon"
                        aria-label="Clear sample"
                        on:click=move |_| vm.sample.set(String::new())
                    >
                        {icon("trash")}
                    </button>
                </div>

                <label class="form-label" for="review-name">"Name *"</label>
                <input
                    id="review-name"
                    type="text"
                    prop:value=move || vm.draft.with(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.draft.update(|d| d.name = value);
                    }
                />

                <label class="form-label" for="review-email">"Email *"</label>
                <input
                    id="review-email"
                    type="email"
                    prop:value=move || vm.draft.with(|d| d.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.draft.update(|d| d.email = value);
                    }
                />

                <button type="submit" class="button button--primary" disabled=pending>
                    {move || if pending() { "Sending…" } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
