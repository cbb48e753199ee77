pub mod page;
pub mod reviews;
pub mod view;
pub mod view_model;

pub use page::ProductDetailsPage;
