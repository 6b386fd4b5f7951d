//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use products_types::{NewProduct, Product, ProductCode, ProductId, ProductRepository, RepoError};

use crate::types::{SqliteProductRow, insert_error};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema (idempotent).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_products.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ProductRepository for SqliteRepo {
    #[tracing::instrument(skip(self, product), fields(code = %product.code))]
    async fn save(&self, product: NewProduct) -> Result<Product, RepoError> {
        let result = sqlx::query(
            r#"INSERT INTO products (code, name, price_eur, is_available) VALUES (?, ?, ?, ?)"#,
        )
        .bind(product.code.as_str())
        .bind(&product.name)
        .bind(product.price_eur.to_string())
        .bind(product.is_available)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error(e, &product.code))?;

        let id = ProductId::from_raw(result.last_insert_rowid());
        tracing::debug!(%id, "Inserted product");

        Ok(Product::from_parts(id, product))
    }

    async fn find_by_code(&self, code: &ProductCode) -> Result<Option<Product>, RepoError> {
        let row: Option<SqliteProductRow> = sqlx::query_as(
            r#"SELECT id, code, name, price_eur, is_available FROM products WHERE code = ?"#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(SqliteProductRow::into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepoError> {
        let rows: Vec<SqliteProductRow> = sqlx::query_as(
            r#"SELECT id, code, name, price_eur, is_available FROM products ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(SqliteProductRow::into_domain).collect()
    }
}
