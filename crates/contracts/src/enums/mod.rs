pub mod category;
pub mod grid_density;
pub mod sort_mode;

pub use category::Category;
pub use grid_density::GridDensity;
pub use sort_mode::SortMode;
