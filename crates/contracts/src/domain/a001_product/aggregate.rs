use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateId;
use crate::enums::Category;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный (в пределах всего каталога) идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u32>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id: {}", e))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога
///
/// Создаётся один раз генератором и больше не изменяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,

    /// Первая картинка — основная (карточка, quick view, share)
    pub images: Vec<String>,

    #[serde(rename = "shortDescription")]
    pub short_description: String,

    #[serde(rename = "longDescription")]
    pub long_description: String,

    /// Цена в рупиях
    pub price: Option<u32>,

    /// Рейтинг 0..=5
    pub rating: Option<f32>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub sku: Option<String>,
}

impl Product {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Абзацы длинного описания (разделитель — пустая строка)
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.long_description
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Путь страницы товара внутри сайта
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.id)
    }

    /// Цена в формате `₹5,249`
    pub fn price_label(&self) -> Option<String> {
        self.price.map(format_rupees)
    }

    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|r| format!("{:.1}", r))
    }
}

/// Группировка разрядов по три, как в `toLocaleString` для en-US
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("₹{}", out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parsing() {
        assert_eq!(ProductId::from_string("21"), Ok(ProductId(21)));
        assert_eq!(ProductId::from_string(" 7 "), Ok(ProductId(7)));
        assert!(ProductId::from_string("abc").is_err());
        assert!(ProductId::from_string("-1").is_err());
        assert_eq!(ProductId(999999).as_string(), "999999");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(4999), "₹4,999");
        assert_eq!(format_rupees(1234567), "₹1,234,567");
    }
}
