//! Social share URLs for a product page.

use serde::{Deserialize, Serialize};

use crate::domain::a001_product::ProductId;

/// Используется, когда origin браузера недоступен
pub const DEFAULT_ORIGIN: &str = "https://example.com";

/// Номер магазина для кнопки «Chat on WhatsApp»
pub const SHOP_WHATSAPP: &str = "https://wa.me/918106815081";

pub fn product_url(origin: &str, id: ProductId) -> String {
    format!("{}/product/{}", origin.trim_end_matches('/'), id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLinks {
    pub facebook: String,
    pub twitter: String,
    pub pinterest: String,
    pub linkedin: String,
    pub whatsapp: String,
}

impl ShareLinks {
    pub fn new(origin: &str, id: ProductId, name: &str, image: Option<&str>) -> Self {
        let url = product_url(origin, id);
        let u = urlencoding::encode(&url);
        let text = urlencoding::encode(&format!("Check out {}", name)).into_owned();
        let media = urlencoding::encode(image.unwrap_or(url.as_str())).into_owned();

        Self {
            facebook: format!("https://www.facebook.com/sharer/sharer.php?u={}", u),
            twitter: format!("https://twitter.com/intent/tweet?url={}&text={}", u, text),
            pinterest: format!(
                "https://pinterest.com/pin/create/button/?url={}&media={}&description={}",
                u, media, text
            ),
            linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={}", u),
            whatsapp: format!(
                "https://wa.me/?text={}",
                urlencoding::encode(&format!("{} - {}", name, url))
            ),
        }
    }
}

/// Ссылка «Buy» у похожих товаров
pub fn whatsapp_interest(name: &str) -> String {
    format!(
        "https://wa.me/?text={}",
        urlencoding::encode(&format!("I'm interested in {}", name))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_links() {
        let links = ShareLinks::new(
            "https://jhulacraft.com/",
            ProductId(21),
            "Outdoor Swing 1",
            Some("/assets/outdoor-swing.jpg"),
        );
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fjhulacraft.com%2Fproduct%2F21"
        );
        assert_eq!(
            links.twitter,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fjhulacraft.com%2Fproduct%2F21&text=Check%20out%20Outdoor%20Swing%201"
        );
        assert!(links.pinterest.contains("&media=%2Fassets%2Foutdoor-swing.jpg&"));
        assert_eq!(
            links.whatsapp,
            "https://wa.me/?text=Outdoor%20Swing%201%20-%20https%3A%2F%2Fjhulacraft.com%2Fproduct%2F21"
        );
    }

    #[test]
    fn test_pinterest_media_falls_back_to_url() {
        let links = ShareLinks::new(DEFAULT_ORIGIN, ProductId(3), "Acrylic Swing 3", None);
        assert!(links
            .pinterest
            .contains("&media=https%3A%2F%2Fexample.com%2Fproduct%2F3&"));
    }

    #[test]
    fn test_whatsapp_interest() {
        assert_eq!(
            whatsapp_interest("Wicker Swing 2"),
            "https://wa.me/?text=I%27m%20interested%20in%20Wicker%20Swing%202"
        );
    }
}
