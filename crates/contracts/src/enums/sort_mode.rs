use serde::{Deserialize, Serialize};

/// Режим сортировки списка товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Порядок генерации каталога
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortMode {
    /// Токен для localStorage и `<option value>`
    pub fn token(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::NameAsc => "name-asc",
            SortMode::NameDesc => "name-desc",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Default => "Default",
            SortMode::NameAsc => "Name: A-Z",
            SortMode::NameDesc => "Name: Z-A",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
        }
    }

    pub fn all() -> [SortMode; 5] {
        [
            SortMode::Default,
            SortMode::NameAsc,
            SortMode::NameDesc,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
        ]
    }

    pub fn from_token(token: &str) -> Option<Self> {
        SortMode::all().into_iter().find(|m| m.token() == token.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for mode in SortMode::all() {
            assert_eq!(SortMode::from_token(mode.token()), Some(mode));
        }
        assert_eq!(SortMode::from_token("price"), None);
    }
}
