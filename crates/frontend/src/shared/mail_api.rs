//! Calls to the backend mail relay.

use contracts::domain::a002_review::ReviewSubmission;
use contracts::domain::a003_inquiry::InquiryForm;
use contracts::shared::mail::MailAck;
use gloo_net::http::Request;
use serde::Serialize;

use super::api_utils::api_url;

/// Отправить заявку со страницы контактов
pub async fn send_inquiry(form: &InquiryForm) -> Result<MailAck, String> {
    post_json("/api/mail/inquiry", form).await
}

/// Отправить отзыв о товаре
pub async fn send_review(review: &ReviewSubmission) -> Result<MailAck, String> {
    post_json("/api/mail/review", review).await
}

async fn post_json<T: Serialize>(path: &str, body: &T) -> Result<MailAck, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let status = response.status();
        // Релей отвечает {"error": "..."}
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string));
        return Err(match detail {
            Some(detail) => format!("HTTP error: {} ({})", status, detail),
            None => format!("HTTP error: {}", status),
        });
    }

    response
        .json::<MailAck>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
