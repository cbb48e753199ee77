pub mod pagination_controls;
pub mod star_rating;

pub use pagination_controls::PaginationControls;
pub use star_rating::StarRating;
