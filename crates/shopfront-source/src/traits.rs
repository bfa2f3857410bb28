use crate::error::Result;
use shopfront_types::{Category, Product, ProductId};
use std::future::Future;

/// The product data source collaborator.
///
/// Responsibilities:
/// - Supply the full product list and the category list (no parameters)
/// - Resolve a single product by identifier
/// - Surface failures as [`crate::Error`] kinds, nothing finer
///
/// Implementations suspend only at their own I/O boundary; callers treat
/// every method as an asynchronous fetch that either settles with data or
/// with an error.
pub trait ProductSource: Send + Sync {
    /// Fetch all products, in the source's canonical ("featured") order.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Fetch the distinct category labels.
    ///
    /// The returned list is authoritative; it is never reconciled against
    /// the product list and may name categories with zero products.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>>> + Send;

    /// Fetch one product by id. Fails with `Error::NotFound` when no
    /// product matches.
    fn get_product(&self, id: ProductId) -> impl Future<Output = Result<Product>> + Send;
}
