//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use products_types::{NewProduct, Product, ProductCode, ProductRepository, RepoError};

use crate::types::{PgProductRow, insert_error};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository; code uniqueness is enforced by a UNIQUE constraint.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_products_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductRepository for PostgresRepo {
    #[tracing::instrument(skip(self, product), fields(code = %product.code))]
    async fn save(&self, product: NewProduct) -> Result<Product, RepoError> {
        let row: PgProductRow = sqlx::query_as(
            r#"INSERT INTO products (code, name, price_eur, is_available)
               VALUES ($1, $2, $3, $4)
               RETURNING id, code, name, price_eur, is_available"#,
        )
        .bind(product.code.as_str())
        .bind(&product.name)
        .bind(product.price_eur)
        .bind(product.is_available)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, &product.code))?;

        let saved = row.into_domain()?;
        tracing::debug!(id = %saved.id, "Inserted product");
        Ok(saved)
    }

    async fn find_by_code(&self, code: &ProductCode) -> Result<Option<Product>, RepoError> {
        let row: Option<PgProductRow> = sqlx::query_as(
            r#"SELECT id, code, name, price_eur, is_available FROM products WHERE code = $1"#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(PgProductRow::into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepoError> {
        let rows: Vec<PgProductRow> = sqlx::query_as(
            r#"SELECT id, code, name, price_eur, is_available FROM products ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(PgProductRow::into_domain).collect()
    }
}
