use chrono::Local;
use contracts::domain::a002_review::ReviewSubmission;
use contracts::domain::a003_inquiry::InquiryForm;
use contracts::shared::mail::EmailParams;
use std::sync::Arc;
use uuid::Uuid;

use super::{MailError, MailTransport};

/// Проверяет форму, собирает параметры шаблона и отправляет письмо
pub struct MailService {
    transport: Arc<dyn MailTransport>,
    recipients: [String; 2],
}

impl MailService {
    pub fn new(transport: Arc<dyn MailTransport>, recipients: [&str; 2]) -> Self {
        Self {
            transport,
            recipients: recipients.map(str::to_string),
        }
    }

    fn recipients(&self) -> [&str; 2] {
        [self.recipients[0].as_str(), self.recipients[1].as_str()]
    }

    /// Время в письме в формате `toLocaleString` (en-US)
    fn timestamp() -> String {
        Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
    }

    pub async fn send_inquiry(&self, form: &InquiryForm) -> Result<(), MailError> {
        form.validate()?;
        let params = EmailParams::inquiry(form, Self::timestamp(), self.recipients());
        self.deliver("inquiry", params).await
    }

    pub async fn send_review(&self, review: &ReviewSubmission) -> Result<(), MailError> {
        review.validate()?;
        let params = EmailParams::review(review, Self::timestamp(), self.recipients());
        self.deliver("review", params).await
    }

    async fn deliver(&self, kind: &str, params: EmailParams) -> Result<(), MailError> {
        let request_id = Uuid::new_v4();
        tracing::info!(%request_id, kind, from = %params.email, "relaying form");

        match self.transport.send(&params).await {
            Ok(()) => {
                tracing::info!(%request_id, kind, "mail sent");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(%request_id, kind, error = %e, "mail failed");
                Err(e)
            }
        }
    }
}
