//! Filter, sort and paginate the products of one category.
//!
//! All functions are pure and cheap at catalog scale, so callers recompute
//! on every keystroke instead of caching.

use std::cmp::Ordering;

use crate::domain::a001_product::{Catalog, Product};
use crate::enums::{Category, SortMode};

/// Товаров на одной странице
pub const PAGE_SIZE: usize = 9;

/// Совпадение по названию, короткому описанию или тегам (без учёта регистра)
pub fn matches(product: &Product, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(&q)
        || product.short_description.to_lowercase().contains(&q)
        || product.tags.iter().any(|t| t.to_lowercase().contains(&q))
}

/// Порядок входа сохраняется
pub fn filter<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, query)).collect()
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

fn price_of(product: &Product) -> u32 {
    product.price.unwrap_or(0)
}

/// Stable sort. `Default` orders by id, which is generation order, so it
/// undoes any earlier sort.
pub fn sort(items: &mut [&Product], mode: SortMode) {
    match mode {
        SortMode::Default => items.sort_by_key(|p| p.id),
        SortMode::NameAsc => items.sort_by(|a, b| compare_names(a, b)),
        SortMode::NameDesc => items.sort_by(|a, b| compare_names(b, a)),
        SortMode::PriceAsc => items.sort_by_key(|p| price_of(p)),
        SortMode::PriceDesc => items.sort_by(|a, b| price_of(b).cmp(&price_of(a))),
    }
}

/// Никогда не меньше 1, даже для пустого списка
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let upper = total_pages.max(1) as i64;
    requested.clamp(1, upper) as usize
}

/// 1-based page window; empty when the page lies past the end.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Полный набор параметров выборки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: Category,
    pub search: String,
    pub sort: SortMode,
    pub page: usize,
    pub page_size: usize,
    pub show_all: bool,
}

impl CatalogQuery {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            search: String::new(),
            sort: SortMode::Default,
            page: 1,
            page_size: PAGE_SIZE,
            show_all: false,
        }
    }

    /// Filtered and sorted, before pagination.
    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let mut items = filter(catalog.find_by_category(self.category), &self.search);
        sort(&mut items, self.sort);
        items
    }

    pub fn run<'a>(&self, catalog: &'a Catalog) -> CatalogPage<'a> {
        let filtered = self.filtered(catalog);
        let filtered_count = filtered.len();
        let total_pages = total_pages(filtered_count, self.page_size);
        let page = clamp_page(self.page as i64, total_pages);

        let (items, offset) = if self.show_all {
            (filtered, 0)
        } else {
            let offset = (page - 1) * self.page_size;
            (paginate(&filtered, page, self.page_size).to_vec(), offset)
        };

        CatalogPage {
            items,
            offset,
            page,
            total_pages,
            filtered_count,
            page_size: self.page_size,
            show_all: self.show_all,
        }
    }
}

/// Результат выборки для отрисовки сетки
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Product>,
    /// Absolute index of `items[0]` in the filtered list
    pub offset: usize,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub page_size: usize,
    pub show_all: bool,
}

impl CatalogPage<'_> {
    pub fn show_pagination(&self) -> bool {
        !self.show_all && self.filtered_count > self.page_size
    }

    pub fn showing_count(&self) -> usize {
        self.items.len()
    }

    /// Position of the card at `slot` in the unpaginated filtered list.
    pub fn absolute_index(&self, slot: usize) -> usize {
        self.offset + slot
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ProductId;

    fn outdoor() -> &'static [Product] {
        Catalog::global().find_by_category(Category::OutdoorSwing)
    }

    fn ids(items: &[&Product]) -> Vec<u32> {
        items.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(filter(outdoor(), "").len(), outdoor().len());
        assert_eq!(filter(outdoor(), "   ").len(), outdoor().len());
    }

    #[test]
    fn test_filter_is_subset_and_matches() {
        for query in ["1", "SWING 1", "handMADE", "garden", "zzz", "outdoor swing 10"] {
            let result = filter(outdoor(), query);
            let q = query.trim().to_lowercase();
            for product in &result {
                assert!(outdoor().iter().any(|p| p.id == product.id));
                let hit = product.name.to_lowercase().contains(&q)
                    || product.short_description.to_lowercase().contains(&q)
                    || product.tags.iter().any(|t| t.contains(&q));
                assert!(hit, "{} does not contain {}", product.name, query);
            }
        }
        assert!(filter(outdoor(), "zzz").is_empty());
        assert_eq!(ids(&filter(outdoor(), "outdoor swing 10")), vec![30]);
    }

    #[test]
    fn test_tags_match_case_insensitively() {
        assert_eq!(filter(outdoor(), "CUSTOMIZABLE").len(), 10);
    }

    #[test]
    fn test_price_desc_is_non_increasing() {
        let mut items = filter(outdoor(), "");
        sort(&mut items, SortMode::PriceDesc);
        let prices: Vec<u32> = items.iter().map(|p| p.price.unwrap()).collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(prices[0], 4999 + 9 * 250);
    }

    #[test]
    fn test_sort_is_idempotent() {
        for mode in SortMode::all() {
            let mut once = filter(outdoor(), "");
            sort(&mut once, mode);
            let mut twice = once.clone();
            sort(&mut twice, mode);
            assert_eq!(ids(&once), ids(&twice), "{:?}", mode);
        }
    }

    #[test]
    fn test_default_restores_generation_order() {
        let mut items = filter(outdoor(), "");
        sort(&mut items, SortMode::NameDesc);
        sort(&mut items, SortMode::Default);
        assert_eq!(ids(&items), (21..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_name_sort_is_lexicographic() {
        let mut items = filter(outdoor(), "");
        sort(&mut items, SortMode::NameAsc);
        assert_eq!(items[0].name, "Outdoor Swing 1");
        assert_eq!(items[1].name, "Outdoor Swing 10");
        assert_eq!(items[2].name, "Outdoor Swing 2");
    }

    #[test]
    fn test_missing_price_counts_as_zero() {
        let mut cheap = outdoor()[3].clone();
        cheap.id = ProductId(500);
        cheap.price = None;
        let mut items: Vec<&Product> = outdoor().iter().collect();
        items.push(&cheap);
        sort(&mut items, SortMode::PriceAsc);
        assert_eq!(items[0].id, ProductId(500));
    }

    #[test]
    fn test_total_pages_floor_is_one() {
        assert_eq!(total_pages(0, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(18, 9), 2);
        assert_eq!(total_pages(19, 9), 3);
    }

    #[test]
    fn test_clamp_page_always_in_range() {
        for total in 1..=5usize {
            for requested in -3i64..=8 {
                let page = clamp_page(requested, total);
                assert!(page >= 1 && page <= total, "{} -> {} of {}", requested, page, total);
            }
        }
    }

    #[test]
    fn test_paginate_length_property() {
        let items: Vec<usize> = (0..23).collect();
        for count in [1usize, 5, 9, 10, 23] {
            let slice = &items[..count];
            let pages = total_pages(count, 9);
            for page in 1..=pages + 2 {
                let got = paginate(slice, page, 9).len();
                let start = (page - 1) * 9;
                let expected = 9.min(count.saturating_sub(start));
                assert_eq!(got, expected, "count {} page {}", count, page);
                assert_eq!(got == 0, page > pages, "count {} page {}", count, page);
            }
        }
    }

    #[test]
    fn test_outdoor_scenario_two_pages() {
        let query = CatalogQuery::new(Category::from_query("Outdoor Swing").unwrap());
        let first = query.run(Catalog::global());
        assert_eq!(first.total_pages, 2);
        assert_eq!(ids(&first.items), (21..=29).collect::<Vec<_>>());
        assert!(first.show_pagination());

        let second = CatalogQuery { page: 2, ..query.clone() }.run(Catalog::global());
        assert_eq!(ids(&second.items), vec![30]);
        assert_eq!(second.offset, 9);
    }

    #[test]
    fn test_show_all_ignores_page() {
        let query = CatalogQuery {
            page: 2,
            show_all: true,
            ..CatalogQuery::new(Category::OutdoorSwing)
        };
        let page = query.run(Catalog::global());
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.offset, 0);
        assert!(!page.show_pagination());
    }

    #[test]
    fn test_absolute_index_on_second_page() {
        let catalog = Catalog::global();
        let query = CatalogQuery {
            page: 2,
            ..CatalogQuery::new(Category::AcrylicSwing)
        };
        let page = query.run(catalog);
        assert_eq!(page.absolute_index(0), 9);
        let filtered = query.filtered(catalog);
        assert_eq!(filtered[page.absolute_index(0)].id, page.items[0].id);
    }
}
