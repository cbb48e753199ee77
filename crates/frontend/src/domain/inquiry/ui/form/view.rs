use crate::shared::mail_api;
use crate::shared::notice::{finish_submission, show_notice, NoticeBanner};
use contracts::domain::a003_inquiry::InquiryForm;
use contracts::shared::submission::{NoticeKind, SubmissionState};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page contact">
            <InquiryFormView />
        </section>
    }
}

#[component]
fn InquiryFormView() -> impl IntoView {
    let form = RwSignal::new(InquiryForm::default());
    let submission = RwSignal::new(SubmissionState::new());
    let notice = Signal::derive(move || submission.with(|s| s.notice().cloned()));
    let pending = move || submission.with(|s| s.is_pending());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            show_notice(submission, NoticeKind::Error, e.to_string());
            return;
        }

        let Some(ticket) = submission.try_update(|s| s.begin()).flatten() else {
            return;
        };

        spawn_local(async move {
            let (kind, message) = match mail_api::send_inquiry(&current).await {
                Ok(_) => (NoticeKind::Success, "Inquiry sent successfully!"),
                Err(e) => {
                    log::error!("inquiry mail failed: {}", e);
                    (NoticeKind::Error, "Failed to send inquiry. Check your network.")
                }
            };

            if finish_submission(submission, ticket, kind, message) {
                let _ = form.try_update(|f| f.clear());
            }
        });
    };

    view! {
        <NoticeBanner notice=notice />
        <form class="inquiry-form" on:submit=on_submit>
            <h1>"Product Inquiry"</h1>
            <input
                type="text"
                placeholder="Your Name"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.name = value);
                }
            />
            <input
                type="email"
                placeholder="Your Email"
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.email = value);
                }
            />
            <textarea
                rows="5"
                placeholder="Your Message"
                prop:value=move || form.with(|f| f.message.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.message = value);
                }
            ></textarea>
            <button type="submit" class="button button--primary" disabled=pending>
                {move || if pending() { "Sending…" } else { "Submit Inquiry" }}
            </button>
        </form>
    }
}
