#[allow(clippy::module_inception)]
pub mod footer;

pub use footer::Footer;
