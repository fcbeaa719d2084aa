//! Fixed in-process product collection.
//!
//! Serves the demo catalog when no database is configured and doubles as a
//! lightweight fixture for handler tests.

use crate::domain::product::Product;
use crate::domain::types::{
    Price, ProductDescription, ProductId, ProductName, TypeConstraintError,
};
use crate::repository::ProductReader;
use crate::repository::errors::{RepositoryError, RepositoryResult};

#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    products: Vec<Product>,
}

impl InMemoryRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Three uncategorized products so the storefront has something to show.
    pub fn sample() -> RepositoryResult<Self> {
        let products = [(1, "Football", 25), (2, "Surfboard", 179), (3, "Running shoes", 95)]
            .into_iter()
            .map(|(id, name, price)| -> Result<Product, TypeConstraintError> {
                Ok(Product::new(
                    ProductId::new(id)?,
                    ProductName::new(name)?,
                    ProductDescription::default(),
                    None,
                    Price::from_units(price)?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        Ok(Self::new(products))
    }
}

impl ProductReader for InMemoryRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.products.clone())
    }
}
