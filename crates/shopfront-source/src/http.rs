use crate::error::{Error, Result};
use crate::traits::ProductSource;
use shopfront_types::{Category, Product, ProductId};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP adapter for a fakestoreapi-compatible product API.
///
/// Endpoints: `/products`, `/products/categories`, `/products/{id}`.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| Error::Network(err.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("Resource {}", path)));
        }
        if !status.is_success() {
            return Err(Error::Server {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

impl ProductSource for HttpSource {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let body = self.get_text("/products").await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;
        debug!(count = products.len(), "fetched product list");
        Ok(products)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let body = self.get_text("/products/categories").await?;
        let categories: Vec<Category> = serde_json::from_str(&body)?;
        debug!(count = categories.len(), "fetched category list");
        Ok(categories)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product> {
        let body = self.get_text(&format!("/products/{}", id)).await?;

        // The upstream API answers unknown ids with an empty 200 body
        // instead of a 404.
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(Error::NotFound(format!("Product {}", id)));
        }

        Ok(serde_json::from_str(trimmed)?)
    }
}
