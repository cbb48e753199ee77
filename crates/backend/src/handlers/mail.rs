use axum::{extract::State, Json};
use contracts::domain::a002_review::ReviewSubmission;
use contracts::domain::a003_inquiry::InquiryForm;
use contracts::shared::mail::MailAck;

use crate::shared::mail::MailError;
use crate::AppState;

/// POST /api/mail/inquiry
pub async fn send_inquiry(
    State(state): State<AppState>,
    Json(form): Json<InquiryForm>,
) -> Result<Json<MailAck>, MailError> {
    state.mail.send_inquiry(&form).await?;
    Ok(Json(MailAck::sent()))
}

/// POST /api/mail/review
pub async fn send_review(
    State(state): State<AppState>,
    Json(review): Json<ReviewSubmission>,
) -> Result<Json<MailAck>, MailError> {
    state.mail.send_review(&review).await?;
    Ok(Json(MailAck::sent()))
}
