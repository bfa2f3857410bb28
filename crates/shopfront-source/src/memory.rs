use crate::error::{Error, Result};
use crate::traits::ProductSource;
use shopfront_types::{Category, Product, ProductId, Rating};

/// In-memory product source for offline mode and tests.
///
/// Holds the product and category lists it was constructed with; the
/// category list is deliberately independent of the products (the source,
/// not the catalog, owns the category vocabulary).
pub struct InMemorySource {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl InMemorySource {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Built-in demo catalog backing the CLI's `--offline` mode.
    pub fn demo() -> Self {
        let products = vec![
            demo_product(
                1,
                "Classic Denim Jacket",
                "Stonewashed denim jacket with brass buttons and two chest pockets.",
                "clothing",
                49.90,
                4.4,
                212,
            ),
            demo_product(
                2,
                "Ceramic Pour-Over Set",
                "Matte ceramic dripper and carafe for slow-brewed coffee.",
                "home",
                34.50,
                4.7,
                98,
            ),
            demo_product(
                3,
                "Wireless Earbuds",
                "Compact earbuds with noise isolation and a pocket charging case.",
                "electronics",
                79.00,
                4.1,
                540,
            ),
            demo_product(
                4,
                "Linen Throw Pillow",
                "Soft linen cover with hidden zipper, insert included.",
                "home",
                18.75,
                4.3,
                67,
            ),
            demo_product(
                5,
                "Graphic Tee",
                "Heavyweight cotton tee with a small embroidered logo.",
                "clothing",
                22.00,
                4.0,
                150,
            ),
            demo_product(
                6,
                "USB-C Desk Hub",
                "Seven-port aluminium hub with pass-through charging.",
                "electronics",
                42.25,
                4.5,
                311,
            ),
        ];

        let categories = vec![
            Category::new("clothing"),
            Category::new("home"),
            Category::new("electronics"),
            // No demo products yet; the category list is source-owned and
            // may legitimately run ahead of the catalog.
            Category::new("outdoors"),
        ];

        Self::new(products, categories)
    }
}

impl ProductSource for InMemorySource {
    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn get_product(&self, id: ProductId) -> Result<Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Product {}", id)))
    }
}

fn demo_product(
    id: u64,
    title: &str,
    description: &str,
    category: &str,
    price: f64,
    rate: f64,
    count: u32,
) -> Product {
    Product {
        id: ProductId(id),
        title: title.to_string(),
        description: description.to_string(),
        category: Category::new(category),
        price,
        image: format!("https://demo.shopfront.test/images/{}.jpg", id),
        rating: Rating { rate, count },
    }
}
