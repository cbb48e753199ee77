//! Relay of storefront forms to the transactional-email service.

pub mod error;
pub mod service;
pub mod transport;

pub use error::MailError;
pub use service::MailService;
pub use transport::{EmailJsTransport, MailTransport};
