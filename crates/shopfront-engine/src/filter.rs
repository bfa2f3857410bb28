use shopfront_types::{CategoryFilter, Criteria, Product, SortKey};
use std::cmp::Ordering;

/// Derive the visible product list for the given criteria.
///
/// Filters first (category and search are conjunctive), then applies a
/// stable sort. `SortKey::Featured` keeps the filtered order untouched.
/// Never fails: an empty input or a selector naming an absent category
/// simply yields an empty list.
pub fn apply(products: &[Product], criteria: &Criteria) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|product| matches_category(product, &criteria.category))
        .filter(|product| matches_search(product, &criteria.search))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::Featured => {}
        SortKey::PriceLow => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Name => visible.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }

    visible
}

fn matches_category(product: &Product, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        // Exact, case-sensitive label match
        CategoryFilter::Only(category) => product.category == *category,
    }
}

fn matches_search(product: &Product, search: &str) -> bool {
    // Only the truly empty string disables the search filter; whitespace-only
    // input is a literal substring query.
    if search.is_empty() {
        return true;
    }

    let needle = search.to_lowercase();
    product.title.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

/// Case-insensitive title comparison (Unicode lowercase fold).
///
/// Stands in for locale-aware collation; ties fall back to the byte order of
/// the original titles so the sort stays total and deterministic.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_types::{Category, ProductId, Rating};

    fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            description: format!("{} description", title),
            category: Category::new(category),
            price,
            image: format!("https://example.test/{}.jpg", id),
            rating: Rating { rate: 4.0, count: 10 },
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shirt", 20.0, "clothing"),
            product(2, "Blue Mug", 10.0, "home"),
            product(3, "Green Jacket", 45.0, "clothing"),
            product(4, "desk lamp", 32.5, "home"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_default_criteria_keeps_input_order() {
        let catalog = sample_catalog();
        let visible = apply(&catalog, &Criteria::default());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let catalog = sample_catalog();
        let criteria = Criteria {
            category: "clothing".parse().unwrap(),
            ..Criteria::default()
        };
        assert_eq!(ids(&apply(&catalog, &criteria)), vec![1, 3]);

        // Case-sensitive: "Clothing" is a different label
        let criteria = Criteria {
            category: "Clothing".parse().unwrap(),
            ..Criteria::default()
        };
        assert!(apply(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let catalog = sample_catalog();

        let criteria = Criteria {
            search: "MUG".to_string(),
            ..Criteria::default()
        };
        assert_eq!(ids(&apply(&catalog, &criteria)), vec![2]);

        // "description" appears in every generated description
        let criteria = Criteria {
            search: "description".to_string(),
            ..Criteria::default()
        };
        assert_eq!(apply(&catalog, &criteria).len(), 4);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let catalog = sample_catalog();
        let criteria = Criteria {
            category: "home".parse().unwrap(),
            search: "lamp".to_string(),
            ..Criteria::default()
        };
        assert_eq!(ids(&apply(&catalog, &criteria)), vec![4]);
    }

    #[test]
    fn test_whitespace_search_is_a_real_query() {
        let catalog = vec![
            product(1, "TwoWords", 5.0, "misc"),
            product(2, "Two Words", 5.0, "misc"),
        ];
        let criteria = Criteria {
            search: " ".to_string(),
            ..Criteria::default()
        };
        // Matches the literal space in title or description; the generated
        // descriptions all contain spaces, so both survive. Titles alone
        // would keep only id 2.
        let visible = apply(&catalog, &criteria);
        assert_eq!(ids(&visible), vec![1, 2]);
    }

    #[test]
    fn test_price_sorts_are_exact_reversals_without_ties() {
        let catalog = sample_catalog();
        let ascending = apply(
            &catalog,
            &Criteria {
                sort: shopfront_types::SortKey::PriceLow,
                ..Criteria::default()
            },
        );
        let descending = apply(
            &catalog,
            &Criteria {
                sort: shopfront_types::SortKey::PriceHigh,
                ..Criteria::default()
            },
        );

        assert_eq!(ids(&ascending), vec![2, 1, 4, 3]);
        let mut reversed = ids(&descending);
        reversed.reverse();
        assert_eq!(ids(&ascending), reversed);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let catalog = sample_catalog();
        let criteria = Criteria {
            sort: shopfront_types::SortKey::Name,
            ..Criteria::default()
        };
        // "desk lamp" sorts by its lowercase form, not after every capital
        assert_eq!(ids(&apply(&catalog, &criteria)), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_result_is_subsequence_of_input() {
        let catalog = sample_catalog();
        let criteria = Criteria {
            search: "e".to_string(),
            ..Criteria::default()
        };
        let visible = apply(&catalog, &criteria);

        let mut cursor = catalog.iter();
        for kept in &visible {
            assert!(
                cursor.any(|original| original.id == kept.id),
                "filtered output reordered or invented id {}",
                kept.id
            );
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = sample_catalog();
        let criteria = Criteria {
            category: "clothing".parse().unwrap(),
            search: "shirt".to_string(),
            sort: shopfront_types::SortKey::PriceLow,
        };

        let once = apply(&catalog, &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_catalog_and_absent_category_yield_empty() {
        assert!(apply(&[], &Criteria::default()).is_empty());

        let catalog = sample_catalog();
        let criteria = Criteria {
            category: "groceries".parse().unwrap(),
            ..Criteria::default()
        };
        assert!(apply(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_spec_scenarios_red_shirt_blue_mug() {
        let catalog = vec![
            product(1, "Red Shirt", 20.0, "clothing"),
            product(2, "Blue Mug", 10.0, "home"),
        ];

        let by_category = apply(
            &catalog,
            &Criteria {
                category: "clothing".parse().unwrap(),
                ..Criteria::default()
            },
        );
        assert_eq!(ids(&by_category), vec![1]);

        let by_search = apply(
            &catalog,
            &Criteria {
                search: "mug".to_string(),
                ..Criteria::default()
            },
        );
        assert_eq!(ids(&by_search), vec![2]);

        let by_price = apply(
            &catalog,
            &Criteria {
                sort: shopfront_types::SortKey::PriceLow,
                ..Criteria::default()
            },
        );
        assert_eq!(ids(&by_price), vec![2, 1]);
    }
}
