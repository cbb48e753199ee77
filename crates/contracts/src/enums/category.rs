use serde::{Deserialize, Serialize};

/// Категории каталога (закрытый список)
///
/// Порядок вариантов совпадает с порядком генерации каталога и с порядком
/// отображения в боковой панели.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Acrylic swing")]
    AcrylicSwing,
    #[serde(rename = "Carving Swing")]
    CarvingSwing,
    #[serde(rename = "Outdoor Swing")]
    OutdoorSwing,
    #[serde(rename = "Single Seater Swing")]
    SingleSeaterSwing,
    #[serde(rename = "Single swing")]
    SingleSwing,
    #[serde(rename = "Stainless steel swing")]
    StainlessSteelSwing,
    #[serde(rename = "Swing with stand")]
    SwingWithStand,
    #[serde(rename = "Wicker Swing")]
    WickerSwing,
    #[serde(rename = "Wooden Swing")]
    WoodenSwing,
}

impl Category {
    /// Человекочитаемое название (оно же значение `?category=` в URL)
    pub fn label(&self) -> &'static str {
        match self {
            Category::AcrylicSwing => "Acrylic swing",
            Category::CarvingSwing => "Carving Swing",
            Category::OutdoorSwing => "Outdoor Swing",
            Category::SingleSeaterSwing => "Single Seater Swing",
            Category::SingleSwing => "Single swing",
            Category::StainlessSteelSwing => "Stainless steel swing",
            Category::SwingWithStand => "Swing with stand",
            Category::WickerSwing => "Wicker Swing",
            Category::WoodenSwing => "Wooden Swing",
        }
    }

    /// Ссылка на листинг, отфильтрованный по категории
    pub fn listing_path(&self) -> String {
        format!("/products?category={}", urlencoding::encode(self.label()))
    }

    /// Все категории в порядке генерации
    pub fn all() -> [Category; 9] {
        [
            Category::AcrylicSwing,
            Category::CarvingSwing,
            Category::OutdoorSwing,
            Category::SingleSeaterSwing,
            Category::SingleSwing,
            Category::StainlessSteelSwing,
            Category::SwingWithStand,
            Category::WickerSwing,
            Category::WoodenSwing,
        ]
    }

    /// Позиция категории в `all()`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Разбор значения из URL без учёта регистра
    ///
    /// `"OUTDOOR SWING"`, `"outdoor swing"` и `" Outdoor Swing "` дают одну категорию.
    pub fn from_query(value: &str) -> Option<Self> {
        let needle = value.trim();
        Category::all()
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
    }

    /// Same as `from_query`, falling back to the default category.
    pub fn from_query_or_default(value: Option<&str>) -> Self {
        value.and_then(Category::from_query).unwrap_or_default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_ignores_case_and_spaces() {
        assert_eq!(Category::from_query("Outdoor Swing"), Some(Category::OutdoorSwing));
        assert_eq!(Category::from_query("OUTDOOR SWING"), Some(Category::OutdoorSwing));
        assert_eq!(Category::from_query("  wicker swing "), Some(Category::WickerSwing));
        assert_eq!(Category::from_query("Garden Swing"), None);
        assert_eq!(Category::from_query(""), None);
    }

    #[test]
    fn test_fallback_category() {
        assert_eq!(Category::from_query_or_default(None), Category::AcrylicSwing);
        assert_eq!(Category::from_query_or_default(Some("nope")), Category::AcrylicSwing);
        assert_eq!(
            Category::from_query_or_default(Some("swing WITH stand")),
            Category::SwingWithStand
        );
    }

    #[test]
    fn test_listing_path_is_encoded() {
        assert_eq!(
            Category::SingleSeaterSwing.listing_path(),
            "/products?category=Single%20Seater%20Swing"
        );
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, category) in Category::all().into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Category::StainlessSteelSwing).unwrap();
        assert_eq!(json, "\"Stainless steel swing\"");
    }
}
