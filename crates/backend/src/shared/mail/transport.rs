use async_trait::async_trait;
use contracts::shared::mail::EmailParams;
use serde::Serialize;
use std::time::Duration;

use super::MailError;
use crate::shared::config::MailConfig;

/// Канал доставки письма (реальный сервис или заглушка в тестах)
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, params: &EmailParams) -> Result<(), MailError>;
}

/// Тело запроса REST API EmailJS
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
}

pub struct EmailJsTransport {
    client: reqwest::Client,
    config: MailConfig,
}

impl EmailJsTransport {
    pub fn new(config: MailConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl MailTransport for EmailJsTransport {
    async fn send(&self, params: &EmailParams) -> Result<(), MailError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(MailError::Rejected {
            status: status.as_u16(),
            body: text,
        })
    }
}
