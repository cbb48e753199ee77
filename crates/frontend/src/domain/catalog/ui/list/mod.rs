pub mod quick_view;
pub mod state;
pub mod widget;

pub use state::CatalogController;
pub use widget::ProductsPage;
