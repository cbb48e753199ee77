//! `?category=` handling for the products page.

use contracts::enums::Category;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ListingQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

/// Query string (with leading `?`) selecting `category`.
pub fn category_search(category: Category) -> String {
    let query = ListingQuery {
        category: Some(category.label().to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

/// Products page URL for `category`, as handed to the router.
pub fn listing_url(category: Category) -> String {
    format!("/products{}", category_search(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(search: &str) -> Option<String> {
        serde_qs::from_str::<ListingQuery>(search.trim_start_matches('?'))
            .ok()
            .and_then(|q| q.category)
    }

    #[test]
    fn test_category_survives_query_string() {
        for category in Category::all() {
            let search = category_search(category);
            assert!(search.starts_with("?category="));
            let raw = parse(&search);
            assert_eq!(Category::from_query_or_default(raw.as_deref()), category);
        }
    }

    #[test]
    fn test_listing_url() {
        let url = listing_url(Category::WickerSwing);
        assert!(url.starts_with("/products?category="));
        assert_eq!(
            parse(url.trim_start_matches("/products")).as_deref(),
            Some("Wicker Swing")
        );
    }
}
