pub mod page;
pub mod sections;

pub use page::HomePage;
