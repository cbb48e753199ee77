pub mod aggregate;
pub mod catalog;
pub mod generator;

pub use aggregate::{Product, ProductId};
pub use catalog::Catalog;
pub use generator::{generate, CategoryTemplate, DEFAULT_TEMPLATES, PRODUCTS_PER_CATEGORY};
