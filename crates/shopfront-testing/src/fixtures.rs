//! Sample catalog data for tests.

use shopfront_types::{Category, Product, ProductId, Rating};

/// Build a product with sensible defaults for fields tests rarely assert on.
pub fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
    Product {
        id: ProductId(id),
        title: title.to_string(),
        description: format!("{} description", title),
        category: Category::new(category),
        price,
        image: format!("https://fixtures.shopfront.test/{}.jpg", id),
        rating: Rating { rate: 4.2, count: 25 },
    }
}

/// The two-product catalog from the listing scenarios:
/// Red Shirt (clothing, 20) and Blue Mug (home, 10).
pub fn red_shirt_blue_mug() -> Vec<Product> {
    vec![
        product(1, "Red Shirt", 20.0, "clothing"),
        product(2, "Blue Mug", 10.0, "home"),
    ]
}

/// A slightly larger catalog with tie-free prices across three categories.
pub fn storefront_catalog() -> Vec<Product> {
    vec![
        product(1, "Red Shirt", 20.0, "clothing"),
        product(2, "Blue Mug", 10.0, "home"),
        product(3, "Green Jacket", 45.0, "clothing"),
        product(4, "Desk Lamp", 32.5, "home"),
        product(5, "Clip-on Fan", 27.0, "electronics"),
    ]
}

pub fn categories(names: &[&str]) -> Vec<Category> {
    names.iter().copied().map(Category::new).collect()
}

/// Category list matching `storefront_catalog`, plus one empty category.
pub fn storefront_categories() -> Vec<Category> {
    categories(&["clothing", "home", "electronics", "outdoors"])
}
