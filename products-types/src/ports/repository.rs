//! Repository port trait.
//!
//! Adapters (Postgres, SQLite, in-memory) implement this trait.

use crate::domain::{NewProduct, Product, ProductCode};
use crate::error::RepoError;

/// Persistence port for products.
///
/// Implementations must enforce `code` uniqueness atomically: a second
/// `save` with an already-used code fails with [`RepoError::Conflict`].
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persists a new product and returns it with its assigned id.
    async fn save(&self, product: NewProduct) -> Result<Product, RepoError>;

    /// Finds a product by its unique code.
    async fn find_by_code(&self, code: &ProductCode) -> Result<Option<Product>, RepoError>;

    /// Lists all products, oldest first.
    async fn find_all(&self) -> Result<Vec<Product>, RepoError>;
}
