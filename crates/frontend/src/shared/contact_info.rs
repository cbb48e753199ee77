//! Shop contact details shown in the header, footer and product pages.

pub const SHOP_NAME: &str = "The Jhula Craft";
pub const SHOP_EMAIL: &str = "thejhulacraft@gmail.com";
pub const SHOP_PHONE: &str = "+91 8106815081";
pub const SHOP_ADDRESS: [&str; 3] = [
    "The Jhula Craft, Madhapur,",
    "Hyderabad, Telangana,",
    "500081, India",
];
pub const YOUTUBE_URL: &str = "https://youtube.com";
pub const INSTAGRAM_URL: &str = "https://instagram.com";

/// Product highlights listed on every detail page
pub const PRODUCT_HIGHLIGHTS: [&str; 3] = [
    "Comes with 10 years warranty period, 400kg weight capacity.",
    "All customization (size, colour, rope height) available as per requirement.",
    "Kurlon 40 density cushioning, fabric/rexine customisation available.",
];
