pub mod view;

pub use view::ContactPage;
