pub mod u101_catalog_query;
pub mod u102_catalog_view;
pub mod u103_product_detail;
