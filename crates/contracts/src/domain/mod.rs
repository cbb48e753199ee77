pub mod a001_product;
pub mod a002_review;
pub mod a003_inquiry;
pub mod common;
