//! Toast shown after a form submission.

use contracts::shared::submission::{
    Notice, NoticeId, NoticeKind, SubmissionState, SubmitTicket, NOTICE_DURATION_MS,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || {
            notice.get().map(|n| {
                let class = match n.kind {
                    NoticeKind::Success => "notice notice--success",
                    NoticeKind::Error => "notice notice--error",
                };
                view! {
                    <div class=class role="status">
                        {n.message}
                    </div>
                }
            })
        }}
    }
}

/// Clear the notice after `NOTICE_DURATION_MS`, unless a newer one replaced it.
pub fn schedule_dismiss(state: RwSignal<SubmissionState>, id: NoticeId) {
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_DURATION_MS).await;
        // Страница могла быть уже закрыта
        let _ = state.try_update(|s| s.dismiss(id));
    });
}

/// Show a notice that is not tied to a request (validation errors).
pub fn show_notice(state: RwSignal<SubmissionState>, kind: NoticeKind, message: String) {
    if let Some(id) = state.try_update(|s| s.notify(kind, message)) {
        schedule_dismiss(state, id);
    }
}

/// Complete a request. Returns `false` when the response is stale and was dropped.
pub fn finish_submission(
    state: RwSignal<SubmissionState>,
    ticket: SubmitTicket,
    kind: NoticeKind,
    message: &str,
) -> bool {
    match state.try_update(|s| s.complete(ticket, kind, message)).flatten() {
        Some(id) => {
            schedule_dismiss(state, id);
            true
        }
        None => false,
    }
}
