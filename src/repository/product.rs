//! Repository implementation for catalog products.

use diesel::prelude::*;

use crate::{
    domain::product::Product,
    models::product::Product as DbProduct,
    repository::{
        DieselRepository, ProductReader,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let db_products = products::table
            .order(products::id.asc())
            .select(DbProduct::as_select())
            .load::<DbProduct>(&mut conn)?;

        db_products
            .into_iter()
            .map(|db_product| Product::try_from(db_product).map_err(RepositoryError::from))
            .collect()
    }
}
