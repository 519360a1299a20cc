use crate::db::{DbConnection, DbPool};
use crate::domain::price::{NewPrice, Price, PriceQuery};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod prices;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over price records.
pub trait PriceReader {
    /// Every stored price for the query's product/brand whose validity
    /// window contains the query instant (both bounds inclusive).
    ///
    /// Returns an empty vector when nothing matches. Result ordering is
    /// unspecified; callers must not rely on it.
    fn list_applicable_prices(&self, query: &PriceQuery) -> RepositoryResult<Vec<Price>>;
}

/// Write operations over price records.
pub trait PriceWriter {
    fn create_prices(&self, new_prices: &[NewPrice]) -> RepositoryResult<usize>;
}
