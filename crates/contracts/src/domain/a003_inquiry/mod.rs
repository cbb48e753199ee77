pub mod aggregate;

pub use aggregate::InquiryForm;
