//! Catalog listing: category filter, ordering and pagination.

use crate::domain::product::Product;
use crate::dto::catalog::ProductsListPage;
use crate::forms::FormError;
use crate::forms::catalog::{CatalogQuery, CatalogQueryForm};
use crate::pagination::PagingInfo;
use crate::repository::ProductReader;
use crate::services::ServiceResult;

/// Loads one page of products for the requested category.
///
/// The repository collection is filtered by category, ordered by id and then
/// sliced; `total_items` in the paging metadata counts the filtered
/// collection. Requesting a page past the end yields an empty slice.
pub fn list_products<R>(
    repo: &R,
    form: CatalogQueryForm,
    page_size: usize,
) -> ServiceResult<ProductsListPage>
where
    R: ProductReader + ?Sized,
{
    if page_size == 0 {
        return Err(FormError::InvalidPageSize.into());
    }

    let requested_category = form.category.clone();
    let query = CatalogQuery::try_from(form)?;

    let mut products = repo
        .list_products()?
        .into_iter()
        .filter(|product| product.matches_category(query.category.as_ref()))
        .collect::<Vec<Product>>();
    products.sort_by_key(|product| product.id);

    let paging_info = PagingInfo::new(query.page, page_size, products.len());

    let products = products
        .into_iter()
        .skip(paging_info.offset().unwrap_or(usize::MAX))
        .take(page_size)
        .collect();

    Ok(ProductsListPage {
        products,
        paging_info,
        current_category: query.category,
        requested_category,
    })
}
