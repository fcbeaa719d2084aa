//! DTOs produced by the catalog listing service.

use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::types::CategoryName;
use crate::pagination::PagingInfo;

/// One page of the catalog together with its paging metadata.
#[derive(Debug, Serialize)]
pub struct ProductsListPage {
    /// Products on the requested page, ordered by id.
    pub products: Vec<Product>,
    pub paging_info: PagingInfo,
    /// Category filter in effect; `None` means all categories.
    pub current_category: Option<CategoryName>,
    /// Category exactly as the client sent it, blank values included.
    pub requested_category: Option<String>,
}

/// Template-friendly view of a [`Product`].
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    /// Price formatted with two decimal places.
    pub price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name.to_string(),
            description: product.description.to_string(),
            category: product.category.as_ref().map(ToString::to_string),
            price: product.price.to_string(),
        }
    }
}
