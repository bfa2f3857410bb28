//! A `ProductSource` with programmable outcomes.

use shopfront_source::{Error, ProductSource, Result};
use shopfront_types::{Category, Product, ProductId};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Product source whose calls can be scripted to fail or to settle late.
///
/// Latencies are consumed per call in FIFO order (a call with no scripted
/// latency settles immediately), so a test can make an older fetch resolve
/// after a newer one. Scripted failures are consumed the same way.
pub struct ScriptedSource {
    products: Vec<Product>,
    categories: Vec<Category>,
    state: Mutex<ScriptState>,
}

#[derive(Default)]
struct ScriptState {
    product_failures: usize,
    get_failures: usize,
    product_latencies: VecDeque<Duration>,
    get_latencies: VecDeque<Duration>,
}

impl ScriptedSource {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
            state: Mutex::new(ScriptState::default()),
        }
    }

    /// Make the next `n` calls to `list_products` fail with HTTP 500.
    pub fn fail_products(self, n: usize) -> Self {
        self.state.lock().unwrap().product_failures = n;
        self
    }

    /// Make the next `n` calls to `get_product` fail with HTTP 500.
    pub fn fail_gets(self, n: usize) -> Self {
        self.state.lock().unwrap().get_failures = n;
        self
    }

    /// Script per-call latencies for `list_products`.
    pub fn product_latencies(self, latencies: impl IntoIterator<Item = Duration>) -> Self {
        self.state.lock().unwrap().product_latencies = latencies.into_iter().collect();
        self
    }

    /// Script per-call latencies for `get_product`.
    pub fn get_latencies(self, latencies: impl IntoIterator<Item = Duration>) -> Self {
        self.state.lock().unwrap().get_latencies = latencies.into_iter().collect();
        self
    }
}

impl ProductSource for ScriptedSource {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let (latency, fail) = {
            let mut state = self.state.lock().unwrap();
            let latency = state.product_latencies.pop_front();
            let fail = if state.product_failures > 0 {
                state.product_failures -= 1;
                true
            } else {
                false
            };
            (latency, fail)
        };

        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        if fail {
            return Err(Error::Server { status: 500 });
        }
        Ok(self.products.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn get_product(&self, id: ProductId) -> Result<Product> {
        let (latency, fail) = {
            let mut state = self.state.lock().unwrap();
            let latency = state.get_latencies.pop_front();
            let fail = if state.get_failures > 0 {
                state.get_failures -= 1;
                true
            } else {
                false
            };
            (latency, fail)
        };

        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        if fail {
            return Err(Error::Server { status: 500 });
        }

        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Product {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[tokio::test]
    async fn test_failures_are_consumed_in_order() {
        let source = ScriptedSource::new(fixtures::red_shirt_blue_mug(), vec![]).fail_products(1);

        assert!(source.list_products().await.is_err());
        assert_eq!(source.list_products().await.unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latencies_apply_per_call() {
        let source = ScriptedSource::new(fixtures::red_shirt_blue_mug(), vec![])
            .product_latencies([Duration::from_millis(100)]);

        let started = tokio::time::Instant::now();
        source.list_products().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(100));

        // Second call has no scripted latency
        let started = tokio::time::Instant::now();
        source.list_products().await.unwrap();
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
