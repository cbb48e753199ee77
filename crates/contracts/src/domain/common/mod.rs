//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod form_error;

// Re-exports
pub use aggregate_id::AggregateId;
pub use form_error::{is_plausible_email, FormError};
