use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable numeric product identifier assigned by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Category label (source-assigned string identifier)
///
/// The set of categories is owned by the data source, not derived from the
/// product list. A category with zero matching products is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregate review score reported by the data source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0.0 to 5.0
    pub rate: f64,
    /// Number of reviews behind the average
    pub count: u32,
}

/// A catalog item as served by the product API.
///
/// Immutable once fetched. Controllers replace their product lists wholesale
/// on reload; nothing mutates a `Product` in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Unit price. Non-negative by convention of the source; not enforced.
    pub price: f64,
    /// Image URI, opaque to everything but the presentation layer
    pub image: String,
    pub rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_source_shape() {
        let json = r#"{
            "id": 1,
            "title": "Red Shirt",
            "price": 20.0,
            "description": "A bright red shirt",
            "category": "clothing",
            "image": "https://example.test/red-shirt.jpg",
            "rating": { "rate": 4.5, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.title, "Red Shirt");
        assert_eq!(product.category, Category::new("clothing"));
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_category_serde_is_transparent() {
        let category: Category = serde_json::from_str("\"electronics\"").unwrap();
        assert_eq!(category.as_str(), "electronics");
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"electronics\"");
    }
}
