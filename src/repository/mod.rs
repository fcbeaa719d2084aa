//! Read access to the product catalog.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::product::Product;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod product;

pub use memory::InMemoryRepository;

/// Source of the full product collection.
///
/// Implementations return every product; filtering, ordering and paging are
/// applied by the services on top of this collection.
pub trait ProductReader {
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

/// Shared handle type the HTTP layer stores in application data.
pub type DynProductReader = dyn ProductReader + Send + Sync;

/// Diesel-backed repository over the SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
