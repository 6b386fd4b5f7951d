//! In-memory repository adapter.
//!
//! Backed by a `DashMap` keyed by product code, so uniqueness is enforced by
//! the map's entry API without a global lock.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use products_types::{NewProduct, Product, ProductCode, ProductId, ProductRepository, RepoError};

/// Volatile repository for tests and local development.
#[derive(Default)]
pub struct InMemoryRepo {
    products: DashMap<ProductCode, Product>,
    next_id: AtomicI64,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepo {
    async fn save(&self, product: NewProduct) -> Result<Product, RepoError> {
        match self.products.entry(product.code.clone()) {
            Entry::Occupied(_) => Err(RepoError::Conflict(product.code.to_string())),
            Entry::Vacant(slot) => {
                let id = ProductId::from_raw(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
                let saved = Product::from_parts(id, product);
                slot.insert(saved.clone());
                Ok(saved)
            }
        }
    }

    async fn find_by_code(&self, code: &ProductCode) -> Result<Option<Product>, RepoError> {
        Ok(self.products.get(code).map(|p| p.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepoError> {
        let mut products: Vec<Product> = self.products.iter().map(|p| p.value().clone()).collect();
        products.sort_by_key(|p| p.id);
        Ok(products)
    }
}
