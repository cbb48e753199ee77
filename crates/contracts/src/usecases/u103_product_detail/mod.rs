//! Product detail page: lookup by global id plus in-category navigation and
//! related products. Works independently of the listing's pagination.

use crate::domain::a001_product::{Catalog, Product, ProductId};
use crate::domain::common::AggregateId;

/// Сколько похожих товаров показывать под карточкой
pub const RELATED_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail<'a> {
    pub product: &'a Product,
    pub previous: Option<&'a Product>,
    pub next: Option<&'a Product>,
    pub related: Vec<&'a Product>,
}

impl ProductDetail<'_> {
    /// Ссылка «назад в категорию» для хлебных крошек
    pub fn category_link(&self) -> String {
        self.product.category.listing_path()
    }
}

/// Resolve the `:id` path segment. `None` means "product not found" and is an
/// ordinary outcome, as is a segment that is not a number at all.
pub fn resolve<'a>(catalog: &'a Catalog, raw_id: &str) -> Option<ProductDetail<'a>> {
    let id = ProductId::from_string(raw_id).ok()?;
    let product = catalog.find_by_id(id)?;

    let (previous, next) = neighbours(catalog, product);

    Some(ProductDetail {
        product,
        previous,
        next,
        related: related(catalog, product, RELATED_COUNT),
    })
}

/// Соседи внутри категории (по порядку генерации)
pub fn neighbours<'a>(
    catalog: &'a Catalog,
    product: &Product,
) -> (Option<&'a Product>, Option<&'a Product>) {
    let shelf = catalog.find_by_category(product.category);
    let Some(position) = shelf.iter().position(|p| p.id == product.id) else {
        return (None, None);
    };
    let previous = position.checked_sub(1).and_then(|i| shelf.get(i));
    let next = shelf.get(position + 1);
    (previous, next)
}

/// Same category first, then everything else, truncated to `limit`.
pub fn related<'a>(catalog: &'a Catalog, product: &Product, limit: usize) -> Vec<&'a Product> {
    let same = catalog
        .products()
        .filter(|p| p.id != product.id && p.category == product.category);
    let others = catalog
        .products()
        .filter(|p| p.id != product.id && p.category != product.category);
    same.chain(others).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Category;

    #[test]
    fn test_unknown_id_is_not_found() {
        let catalog = Catalog::global();
        assert!(resolve(catalog, "999999").is_none());
        assert!(resolve(catalog, "abc").is_none());
        assert!(resolve(catalog, "").is_none());
    }

    #[test]
    fn test_neighbours_inside_category() {
        let catalog = Catalog::global();

        let first = resolve(catalog, "21").unwrap();
        assert!(first.previous.is_none());
        assert_eq!(first.next.map(|p| p.id.value()), Some(22));

        let middle = resolve(catalog, "25").unwrap();
        assert_eq!(middle.previous.map(|p| p.id.value()), Some(24));
        assert_eq!(middle.next.map(|p| p.id.value()), Some(26));

        // Последний товар категории не перескакивает в следующую
        let last = resolve(catalog, "30").unwrap();
        assert!(last.next.is_none());
    }

    #[test]
    fn test_related_is_deterministic_and_excludes_self() {
        let catalog = Catalog::global();
        let detail = resolve(catalog, "23").unwrap();
        let ids: Vec<u32> = detail.related.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![21, 22, 24, 25, 26, 27]);
        assert!(detail.related.iter().all(|p| p.category == Category::OutdoorSwing));
    }

    #[test]
    fn test_related_spills_into_other_categories() {
        let catalog = Catalog::from_templates(&crate::domain::a001_product::DEFAULT_TEMPLATES, 3);
        let product = catalog.find_by_id(ProductId(4)).unwrap();
        let ids: Vec<u32> = related(&catalog, product, RELATED_COUNT)
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![5, 6, 1, 2, 3, 7]);
    }

    #[test]
    fn test_category_link_is_encoded() {
        let detail = resolve(Catalog::global(), "21").unwrap();
        assert_eq!(detail.category_link(), "/products?category=Outdoor%20Swing");
    }
}
