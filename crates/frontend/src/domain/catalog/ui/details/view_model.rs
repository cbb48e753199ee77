//! ViewModel of the product details page.
//!
//! Gallery selection, the active tab and the review form. Everything is
//! reset when the route switches to another product.

use crate::shared::mail_api;
use crate::shared::notice::{finish_submission, show_notice};
use chrono::DateTime;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_review::{Review, ReviewDraft};
use contracts::shared::submission::{NoticeKind, SubmissionState};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Description,
    Reviews,
}

#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    /// Индекс картинки в `product.images`
    pub main_image: RwSignal<usize>,
    pub active_tab: RwSignal<DetailTab>,
    /// Отзывы текущей сессии, новые сверху
    pub reviews: RwSignal<Vec<Review>>,
    pub draft: RwSignal<ReviewDraft>,
    /// Выбранный пункт списка готовых фраз
    pub sample: RwSignal<String>,
    pub submission: RwSignal<SubmissionState>,
}

impl ProductDetailsVm {
    pub fn new() -> Self {
        Self {
            main_image: RwSignal::new(0),
            active_tab: RwSignal::new(DetailTab::Description),
            reviews: RwSignal::new(Vec::new()),
            draft: RwSignal::new(ReviewDraft::default()),
            sample: RwSignal::new(String::new()),
            submission: RwSignal::new(SubmissionState::new()),
        }
    }

    /// Another product was opened; a pending review response is dropped.
    pub fn reset(&self) {
        self.main_image.set(0);
        self.active_tab.set(DetailTab::Description);
        self.reviews.set(Vec::new());
        self.draft.set(ReviewDraft::default());
        self.sample.set(String::new());
        self.submission.update(|s| s.cancel());
    }

    pub fn set_rating(&self, rating: u8) {
        self.draft.update(|d| d.rating = rating);
    }

    pub fn choose_sample(&self, sample: String) {
        self.draft.update(|d| d.append_sample(&sample));
        self.sample.set(sample);
    }

    pub fn submit_review(&self, product: &'static Product) {
        let draft = self.draft.get_untracked();
        if let Err(e) = draft.validate() {
            show_notice(self.submission, NoticeKind::Error, e.to_string());
            return;
        }

        let Some(ticket) = self.submission.try_update(|s| s.begin()).flatten() else {
            return;
        };

        let submission = draft.to_submission(product);
        let millis = js_sys::Date::now() as i64;
        let date = DateTime::from_timestamp_millis(millis).unwrap_or_default();
        // Отзыв показывается сразу, независимо от доставки письма
        self.reviews
            .update(|list| list.insert(0, draft.into_review(millis, date)));
        self.active_tab.set(DetailTab::Reviews);

        let vm = *self;
        spawn_local(async move {
            let (kind, message) = match mail_api::send_review(&submission).await {
                Ok(_) => (
                    NoticeKind::Success,
                    "Review submitted and emailed successfully!",
                ),
                Err(e) => {
                    log::error!("review mail for product {} failed: {}", submission.product_id, e);
                    (NoticeKind::Error, "Review saved but failed to send email.")
                }
            };

            if finish_submission(vm.submission, ticket, kind, message) {
                let _ = vm.draft.try_update(|d| d.clear());
                let _ = vm.sample.try_set(String::new());
                let _ = vm.active_tab.try_set(DetailTab::Reviews);
            }
        });
    }
}

impl Default for ProductDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
