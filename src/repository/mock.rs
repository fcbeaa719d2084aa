//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::product::Product;
use crate::repository::ProductReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl ProductReader for Repository {
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }
}
