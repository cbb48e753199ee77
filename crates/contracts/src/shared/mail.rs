//! Payload of the transactional-email template.
//!
//! Both forms end up as the same template parameters; reviews add the
//! product fields.

use serde::{Deserialize, Serialize};

use crate::domain::a002_review::ReviewSubmission;
use crate::domain::a003_inquiry::InquiryForm;

/// Ответ почтового релея
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailAck {
    pub status: String,
}

impl MailAck {
    pub fn sent() -> Self {
        Self {
            status: "sent".to_string(),
        }
    }
}

/// Параметры шаблона письма
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailParams {
    pub name: String,
    pub email: String,
    pub message: String,
    pub time: String,
    pub to_email_1: String,
    pub to_email_2: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub product_id: Option<u32>,
}

impl EmailParams {
    pub fn inquiry(form: &InquiryForm, time: String, recipients: [&str; 2]) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            message: form.message.trim().to_string(),
            time,
            to_email_1: recipients[0].to_string(),
            to_email_2: recipients[1].to_string(),
            product_name: None,
            product_id: None,
        }
    }

    pub fn review(review: &ReviewSubmission, time: String, recipients: [&str; 2]) -> Self {
        Self {
            name: review.name.trim().to_string(),
            email: review.email.trim().to_string(),
            message: format!(
                "Product: {}\nRating: {}\nReview: {}",
                review.product_name,
                review.rating,
                review.comment.trim()
            ),
            time,
            to_email_1: recipients[0].to_string(),
            to_email_2: recipients[1].to_string(),
            product_name: Some(review.product_name.clone()),
            product_id: Some(review.product_id.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ProductId;

    const TO: [&str; 2] = ["first@shop.in", "second@shop.in"];

    #[test]
    fn test_inquiry_payload_has_no_product_fields() {
        let form = InquiryForm {
            name: " Meera ".into(),
            email: "meera@mail.com".into(),
            message: "Hello".into(),
        };
        let json = serde_json::to_value(EmailParams::inquiry(&form, "now".into(), TO)).unwrap();
        assert_eq!(json["name"], "Meera");
        assert_eq!(json["to_email_2"], "second@shop.in");
        assert!(json.get("product_name").is_none());
        assert!(json.get("product_id").is_none());
    }

    #[test]
    fn test_review_payload() {
        let review = ReviewSubmission {
            product_id: ProductId(21),
            product_name: "Outdoor Swing 1".into(),
            rating: 5,
            name: "Ravi".into(),
            email: "ravi@mail.com".into(),
            comment: "Lovely".into(),
        };
        let params = EmailParams::review(&review, "now".into(), TO);
        assert_eq!(
            params.message,
            "Product: Outdoor Swing 1\nRating: 5\nReview: Lovely"
        );
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["product_id"], 21);
        assert_eq!(json["product_name"], "Outdoor Swing 1");
    }
}
