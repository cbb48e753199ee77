use once_cell::sync::Lazy;

use super::aggregate::{Product, ProductId};
use super::generator::{generate, CategoryTemplate, DEFAULT_TEMPLATES, PRODUCTS_PER_CATEGORY};
use crate::enums::Category;

/// Process-wide catalog, built from [`DEFAULT_TEMPLATES`] on first access.
static CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_templates(&DEFAULT_TEMPLATES, PRODUCTS_PER_CATEGORY));

/// Read-only product catalog grouped by category.
///
/// There is no mutation API: a `Catalog` is produced once and then only read.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Indexed by `Category::index()`
    shelves: Vec<Vec<Product>>,
}

impl Catalog {
    /// The shared instance used by the storefront.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    /// Generate every template in order.
    ///
    /// Ids run consecutively from 1 across the whole catalog, so they are
    /// unique globally and not just within a category.
    pub fn from_templates(templates: &[CategoryTemplate], per_category: usize) -> Self {
        let mut shelves: Vec<Vec<Product>> = vec![Vec::new(); Category::all().len()];
        let mut next_id: u32 = 1;

        for template in templates {
            let products = generate(template, next_id, per_category);
            next_id += products.len() as u32;
            shelves[template.category.index()].extend(products);
        }

        Self { shelves }
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products().find(|p| p.id == id)
    }

    /// Товары категории в порядке генерации
    pub fn find_by_category(&self, category: Category) -> &[Product] {
        self.shelves
            .get(category.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Пустой срез для нераспознанной категории
    pub fn find_by_category_name(&self, name: &str) -> &[Product] {
        match Category::from_query(name) {
            Some(category) => self.find_by_category(category),
            None => &[],
        }
    }

    /// All products in global generation order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.shelves.iter().flat_map(|shelf| shelf.iter())
    }

    pub fn len(&self) -> usize {
        self.shelves.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_fixed_count() {
        let catalog = Catalog::global();
        for category in Category::all() {
            assert_eq!(
                catalog.find_by_category(category).len(),
                PRODUCTS_PER_CATEGORY,
                "category {}",
                category
            );
        }
        assert_eq!(catalog.len(), 90);
    }

    #[test]
    fn test_ids_are_globally_unique() {
        let catalog = Catalog::global();
        let ids: HashSet<_> = catalog.products().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_outdoor_swing_ids() {
        let ids: Vec<u32> = Catalog::global()
            .find_by_category_name("Outdoor Swing")
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, (21..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::global();
        let product = catalog.find_by_id(ProductId(21)).unwrap();
        assert_eq!(product.name, "Outdoor Swing 1");
        assert!(catalog.find_by_id(ProductId(999999)).is_none());
    }

    #[test]
    fn test_unknown_category_name_is_empty() {
        assert!(Catalog::global().find_by_category_name("Garden Swing").is_empty());
    }

    #[test]
    fn test_products_follow_category_order() {
        let first_of_each: Vec<Category> = Catalog::global()
            .products()
            .step_by(PRODUCTS_PER_CATEGORY)
            .map(|p| p.category)
            .collect();
        assert_eq!(first_of_each, Category::all().to_vec());
    }
}
