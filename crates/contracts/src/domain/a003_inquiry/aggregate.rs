use serde::{Deserialize, Serialize};

use crate::domain::common::form_error::validate_contact;
use crate::domain::common::FormError;

/// Форма обращения со страницы контактов
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl InquiryForm {
    /// Проверка полей в порядке их следования на форме
    pub fn validate(&self) -> Result<(), FormError> {
        validate_contact(&self.name, &self.email)?;
        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_is_rejected() {
        let form = InquiryForm {
            name: "Meera".into(),
            email: "meera@mail.com".into(),
            message: "  ".into(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingMessage));
    }

    #[test]
    fn test_valid_inquiry() {
        let form = InquiryForm {
            name: "Meera".into(),
            email: "meera@mail.com".into(),
            message: "Do you ship to Pune?".into(),
        };
        assert!(form.validate().is_ok());
    }
}
