//! Category navigation menu.

use std::collections::BTreeSet;

use crate::domain::types::CategoryName;
use crate::dto::navigation::CategoryMenu;
use crate::repository::ProductReader;
use crate::services::ServiceResult;

/// Collects the distinct product categories in ascending order.
pub fn load_menu<R>(repo: &R, selected_category: Option<String>) -> ServiceResult<CategoryMenu>
where
    R: ProductReader + ?Sized,
{
    let categories = repo
        .list_products()?
        .into_iter()
        .filter_map(|product| product.category)
        .collect::<BTreeSet<CategoryName>>()
        .into_iter()
        .collect();

    Ok(CategoryMenu {
        categories,
        selected_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use crate::domain::types::{Price, ProductDescription, ProductId, ProductName};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn build_product(id: i32, category: Option<&str>) -> Product {
        Product::new(
            ProductId::new(id).expect("valid product id"),
            ProductName::new(format!("P{id}")).expect("valid product name"),
            ProductDescription::default(),
            category.map(|c| CategoryName::new(c).expect("valid category")),
            Price::from_units(1).expect("valid price"),
        )
    }

    #[test]
    fn creates_sorted_distinct_categories() {
        let mut repo = MockRepository::new();
        repo.expect_list_products().times(1).returning(|| {
            Ok(vec![
                build_product(1, Some("Apple")),
                build_product(2, Some("Apple")),
                build_product(3, Some("Zed")),
                build_product(4, Some("Computer")),
            ])
        });

        let menu = load_menu(&repo, None).expect("should load menu");

        let names: Vec<_> = menu.categories.iter().map(CategoryName::as_str).collect();
        assert_eq!(names, vec!["Apple", "Computer", "Zed"]);
    }

    #[test]
    fn skips_uncategorized_products() {
        let mut repo = MockRepository::new();
        repo.expect_list_products()
            .returning(|| Ok(vec![build_product(1, None), build_product(2, Some("Chess"))]));

        let menu = load_menu(&repo, None).expect("should load menu");

        assert_eq!(menu.categories.len(), 1);
        assert_eq!(menu.categories[0].as_str(), "Chess");
    }

    #[test]
    fn echoes_selected_category() {
        let mut repo = MockRepository::new();
        repo.expect_list_products().returning(|| {
            Ok(vec![
                build_product(1, Some("Apple")),
                build_product(4, Some("Computer")),
            ])
        });

        let menu = load_menu(&repo, Some("Apple".to_string())).expect("should load menu");

        assert_eq!(menu.selected_category.as_deref(), Some("Apple"));
    }

    #[test]
    fn repository_failure_propagates() {
        let mut repo = MockRepository::new();
        repo.expect_list_products()
            .returning(|| Err(RepositoryError::DatabaseError("locked".to_string())));

        let result = load_menu(&repo, None);

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
