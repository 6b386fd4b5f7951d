//! Database row types and conversion helpers shared by the SQL adapters.

use rust_decimal::Decimal;
use sqlx::FromRow;

use products_types::{NewProduct, Product, ProductCode, ProductId, RepoError};

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Product row from SQLite.
///
/// SQLite has no exact decimal type, so the EUR price is stored as text.
#[cfg(feature = "sqlite")]
#[derive(FromRow)]
pub struct SqliteProductRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub price_eur: String,
    pub is_available: bool,
}

#[cfg(feature = "sqlite")]
impl SqliteProductRow {
    /// Convert database row to domain Product.
    pub fn into_domain(self) -> Result<Product, RepoError> {
        use std::str::FromStr;

        let price_eur = Decimal::from_str(&self.price_eur)
            .map_err(|e| RepoError::Database(format!("Invalid stored price: {}", e)))?;

        build_product(self.id, self.code, self.name, price_eur, self.is_available)
    }
}

/// Product row from PostgreSQL.
#[cfg(feature = "postgres")]
#[derive(FromRow)]
pub struct PgProductRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub price_eur: Decimal,
    pub is_available: bool,
}

#[cfg(feature = "postgres")]
impl PgProductRow {
    /// Convert database row to domain Product.
    pub fn into_domain(self) -> Result<Product, RepoError> {
        build_product(self.id, self.code, self.name, self.price_eur, self.is_available)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Re-validates stored fields while rebuilding the domain value.
fn build_product(
    id: i64,
    code: String,
    name: String,
    price_eur: Decimal,
    is_available: bool,
) -> Result<Product, RepoError> {
    let code = ProductCode::parse(code)?;
    let new = NewProduct::new(code, name, price_eur, is_available)?;
    Ok(Product::from_parts(ProductId::from_raw(id), new))
}

/// Maps a sqlx failure on insert, turning unique violations into conflicts.
pub fn insert_error(err: sqlx::Error, code: &ProductCode) -> RepoError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepoError::Conflict(code.to_string())
        }
        _ => RepoError::Database(err.to_string()),
    }
}
