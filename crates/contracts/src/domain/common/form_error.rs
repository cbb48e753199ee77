use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures of the inquiry and review forms.
///
/// The display text is shown to the visitor as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FormError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter your email address.")]
    MissingEmail,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please write a message.")]
    MissingMessage,

    #[error("Please write your review.")]
    MissingComment,

    #[error("Please give a rating between 1 and 5 stars.")]
    MissingRating,
}

/// Syntactic sanity check, not RFC 5322: `local@domain.tld` without whitespace.
pub fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() {
        return false;
    }

    match domain.find('.') {
        Some(_) => !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}

/// Validate name and email the same way for every form.
pub(crate) fn validate_contact(name: &str, email: &str) -> Result<(), FormError> {
    if name.trim().is_empty() {
        return Err(FormError::MissingName);
    }
    if email.trim().is_empty() {
        return Err(FormError::MissingEmail);
    }
    if !is_plausible_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_emails() {
        assert!(is_plausible_email("sales@jhulacraft.com"));
        assert!(is_plausible_email("  first.last@mail.example.in "));
    }

    #[test]
    fn test_implausible_emails() {
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("no-at-sign.com"));
        assert!(!is_plausible_email("@jhulacraft.com"));
        assert!(!is_plausible_email("a@b@c.com"));
        assert!(!is_plausible_email("user@localhost"));
        assert!(!is_plausible_email("user@.com"));
        assert!(!is_plausible_email("user@mail."));
        assert!(!is_plausible_email("us er@mail.com"));
    }

    #[test]
    fn test_validate_contact_order() {
        assert_eq!(validate_contact(" ", ""), Err(FormError::MissingName));
        assert_eq!(validate_contact("Asha", " "), Err(FormError::MissingEmail));
        assert_eq!(validate_contact("Asha", "asha"), Err(FormError::InvalidEmail));
        assert_eq!(validate_contact("Asha", "asha@mail.com"), Ok(()));
    }
}
