use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, Price, ProductDescription, ProductId, ProductName};

/// Catalog entry as seen by the listing and navigation services.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: ProductDescription,
    /// `None` for products that belong to no category.
    pub category: Option<CategoryName>,
    pub price: Price,
}

impl Product {
    #[must_use]
    pub fn new(
        id: ProductId,
        name: ProductName,
        description: ProductDescription,
        category: Option<CategoryName>,
        price: Price,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            price,
        }
    }

    /// Checks the product against an optional category filter.
    ///
    /// Uncategorized products pass every filter; otherwise the comparison is
    /// exact and case-sensitive.
    pub fn matches_category(&self, filter: Option<&CategoryName>) -> bool {
        match (filter, &self.category) {
            (None, _) | (_, None) => true,
            (Some(wanted), Some(own)) => wanted == own,
        }
    }
}
