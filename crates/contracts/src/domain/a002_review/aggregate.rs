use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_product::{Product, ProductId};
use crate::domain::common::form_error::validate_contact;
use crate::domain::common::FormError;

/// Готовые фразы для выпадающего списка в форме отзыва
pub const SAMPLE_COMMENTS: [&str; 4] = [
    "Good quality.",
    "Delivered on time.",
    "Very comfortable and sturdy.",
    "Excellent finish, looks great.",
];

pub const MAX_RATING: u8 = 5;

/// Отзыв, показанный на странице товара
///
/// Живёт только в состоянии страницы и теряется при уходе с неё.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Метка времени отправки в миллисекундах
    pub id: i64,
    pub rating: u8,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub date: DateTime<Utc>,
}

impl Review {
    /// `★★★☆☆` for a rating of three
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        let mut out = "★".repeat(filled);
        out.push_str(&"☆".repeat(MAX_RATING as usize - filled));
        out
    }
}

/// Поля формы отзыва до отправки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// 0 — звёзды ещё не выбраны
    pub rating: u8,
    pub name: String,
    pub email: String,
    pub comment: String,
}

impl ReviewDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.rating < 1 || self.rating > MAX_RATING {
            return Err(FormError::MissingRating);
        }
        if self.comment.trim().is_empty() {
            return Err(FormError::MissingComment);
        }
        validate_contact(&self.name, &self.email)
    }

    /// Append a canned phrase on its own line.
    pub fn append_sample(&mut self, sample: &str) {
        if sample.is_empty() {
            return;
        }
        if self.comment.is_empty() {
            self.comment = sample.to_string();
        } else {
            self.comment = format!("{}\n{}", self.comment, sample);
        }
    }

    pub fn into_review(self, id_millis: i64, date: DateTime<Utc>) -> Review {
        Review {
            id: id_millis,
            rating: self.rating,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            comment: self.comment.trim().to_string(),
            date,
        }
    }

    pub fn to_submission(&self, product: &Product) -> ReviewSubmission {
        ReviewSubmission {
            product_id: product.id,
            product_name: product.name.clone(),
            rating: self.rating,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            comment: self.comment.trim().to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// DTO отзыва для отправки на почтовый релей
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    #[serde(rename = "productName")]
    pub product_name: String,
    pub rating: u8,
    pub name: String,
    pub email: String,
    pub comment: String,
}

impl ReviewSubmission {
    /// The relay re-checks what the browser already checked.
    pub fn validate(&self) -> Result<(), FormError> {
        ReviewDraft {
            rating: self.rating,
            name: self.name.clone(),
            email: self.email.clone(),
            comment: self.comment.clone(),
        }
        .validate()
    }
}
