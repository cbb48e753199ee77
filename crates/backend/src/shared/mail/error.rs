use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::FormError;
use serde_json::json;
use thiserror::Error;

/// Ошибки отправки письма
#[derive(Debug, Error)]
pub enum MailError {
    #[error("{0}")]
    Validation(#[from] FormError),

    #[error("Mail service unreachable: {0}")]
    Delivery(String),

    #[error("Mail service rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl MailError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MailError::Validation(_) => StatusCode::BAD_REQUEST,
            MailError::Delivery(_) | MailError::Rejected { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for MailError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("mail relay failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            MailError::from(FormError::MissingMessage).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MailError::Delivery("timeout".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            MailError::Rejected {
                status: 400,
                body: "The user_id parameter is required".into()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_validation_message_is_user_facing() {
        let err = MailError::from(FormError::MissingMessage);
        assert_eq!(err.to_string(), "Please write a message.");
    }
}
