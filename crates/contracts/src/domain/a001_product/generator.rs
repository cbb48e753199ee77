//! Deterministic generator of the built-in catalog.
//!
//! Every category is produced from a [`CategoryTemplate`] multiplied by a
//! fixed count. The same template, first id and count always give the same
//! products, which is what keeps `/product/:id` links stable.

use super::aggregate::{Product, ProductId};
use crate::enums::Category;

/// Товаров в каждой категории
pub const PRODUCTS_PER_CATEGORY: usize = 10;

const BASE_PRICE: u32 = 4999;
const PRICE_STEP: u32 = 250;

const ACRYLIC: &str = "/assets/acrylic-swing.jpg";
const CARVED: &str = "/assets/carved-swing.jpg";
const OUTDOOR: &str = "/assets/outdoor-swing.jpg";
const SINGLE: &str = "/assets/single-swing.jpg";

/// Шаблон генерации одной категории
#[derive(Debug, Clone, Copy)]
pub struct CategoryTemplate {
    pub category: Category,
    /// Основа названия: `"{title} {n}"`
    pub title: &'static str,
    /// Картинки циклически назначаются товарам по индексу
    pub images: &'static [&'static str],
}

pub const DEFAULT_TEMPLATES: [CategoryTemplate; 9] = [
    CategoryTemplate {
        category: Category::AcrylicSwing,
        title: "Acrylic Swing",
        images: &[ACRYLIC, CARVED, OUTDOOR, SINGLE],
    },
    CategoryTemplate {
        category: Category::CarvingSwing,
        title: "Carving Swing",
        images: &[CARVED, ACRYLIC, OUTDOOR],
    },
    CategoryTemplate {
        category: Category::OutdoorSwing,
        title: "Outdoor Swing",
        images: &[OUTDOOR, SINGLE, ACRYLIC],
    },
    CategoryTemplate {
        category: Category::SingleSeaterSwing,
        title: "Single Seater Swing",
        images: &[SINGLE, ACRYLIC, CARVED],
    },
    CategoryTemplate {
        category: Category::SingleSwing,
        title: "Single Swing",
        images: &[SINGLE, CARVED, OUTDOOR],
    },
    CategoryTemplate {
        category: Category::StainlessSteelSwing,
        title: "Stainless Swing",
        images: &[ACRYLIC, CARVED, OUTDOOR],
    },
    CategoryTemplate {
        category: Category::SwingWithStand,
        title: "Swing With Stand",
        images: &[ACRYLIC, CARVED, SINGLE],
    },
    CategoryTemplate {
        category: Category::WickerSwing,
        title: "Wicker Swing",
        images: &[ACRYLIC, CARVED, OUTDOOR],
    },
    CategoryTemplate {
        category: Category::WoodenSwing,
        title: "Wooden Swing",
        images: &[ACRYLIC, CARVED, OUTDOOR],
    },
];

/// Build `count` products for one category, ids starting at `first_id`.
///
/// Product `i` takes `images[i % len]` as its primary picture; the rest of the
/// template follows in rotation so the detail gallery has every shot.
pub fn generate(template: &CategoryTemplate, first_id: u32, count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            let id = first_id + i as u32;
            let number = i + 1;
            let name = format!("{} {}", template.title, number);
            let lower = template.title.to_lowercase();

            Product {
                id: ProductId::new(id),
                category: template.category,
                images: rotated_images(template.images, i),
                short_description: format!(
                    "Beautiful {} {} - handcrafted, durable, and elegant. Perfect for homes and gardens.",
                    lower, number
                ),
                long_description: format!(
                    "{name} is built by our artisans from seasoned materials and finished by hand. \
                     It is high quality and durable, holds heavy weight and comes with a ten year warranty.\n\n\
                     Size, colour, rope height and cushioning can all be customised to suit your {lower} setup."
                ),
                price: Some(BASE_PRICE + i as u32 * PRICE_STEP),
                rating: Some(rating_for(i)),
                tags: vec!["handmade".to_string(), "customizable".to_string()],
                sku: Some(format!("{}-{}", sku_prefix(template.title), id)),
                name,
            }
        })
        .collect()
}

fn rotated_images(images: &[&str], index: usize) -> Vec<String> {
    if images.is_empty() {
        return Vec::new();
    }
    let start = index % images.len();
    images[start..]
        .iter()
        .chain(images[..start].iter())
        .map(|s| s.to_string())
        .collect()
}

/// 4.0, 4.3, 4.6, 4.0, ...
fn rating_for(index: usize) -> f32 {
    let raw = 4.0 + (index % 3) as f32 * 0.3;
    (raw * 10.0).round() / 10.0
}

fn sku_prefix(title: &str) -> String {
    title.chars().take(3).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate(&DEFAULT_TEMPLATES[2], 21, 10);
        let b = generate(&DEFAULT_TEMPLATES[2], 21, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_fields() {
        let items = generate(&DEFAULT_TEMPLATES[2], 21, 10);
        assert_eq!(items.len(), 10);

        let first = &items[0];
        assert_eq!(first.id, ProductId(21));
        assert_eq!(first.name, "Outdoor Swing 1");
        assert_eq!(first.category, Category::OutdoorSwing);
        assert_eq!(first.primary_image(), Some(OUTDOOR));
        assert_eq!(first.price, Some(4999));
        assert_eq!(first.sku.as_deref(), Some("OUT-21"));

        let last = &items[9];
        assert_eq!(last.id, ProductId(30));
        assert_eq!(last.name, "Outdoor Swing 10");
        assert_eq!(last.price, Some(4999 + 9 * 250));
    }

    #[test]
    fn test_images_cycle_by_index() {
        let items = generate(&DEFAULT_TEMPLATES[2], 21, 4);
        let primaries: Vec<_> = items.iter().map(|p| p.primary_image().unwrap()).collect();
        assert_eq!(primaries, vec![OUTDOOR, SINGLE, ACRYLIC, OUTDOOR]);
        assert_eq!(items[1].images, vec![SINGLE, ACRYLIC, OUTDOOR]);
    }

    #[test]
    fn test_ratings_cycle() {
        let items = generate(&DEFAULT_TEMPLATES[0], 1, 4);
        let ratings: Vec<_> = items.iter().map(|p| p.rating.unwrap()).collect();
        assert_eq!(ratings, vec![4.0, 4.3, 4.6, 4.0]);
    }

    #[test]
    fn test_long_description_has_paragraphs() {
        let items = generate(&DEFAULT_TEMPLATES[0], 1, 1);
        assert_eq!(items[0].paragraphs().count(), 2);
    }
}
