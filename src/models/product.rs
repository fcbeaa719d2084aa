//! Diesel models representing catalog products.

use diesel::prelude::*;

use crate::domain::product::Product as DomainProduct;
use crate::domain::types::{
    CategoryName, Price, ProductDescription, ProductId, ProductName, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    /// Decimal amount stored as text, e.g. `"48.95"`.
    pub price: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
/// Insertable form of [`Product`].
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub category: Option<&'a str>,
    pub price: String,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::try_from(product.id)?,
            name: ProductName::new(product.name)?,
            description: ProductDescription::new(product.description),
            category: CategoryName::parse_optional(product.category),
            price: product.price.parse::<Price>()?,
        })
    }
}

impl<'a> From<&'a DomainProduct> for NewProduct<'a> {
    fn from(product: &'a DomainProduct) -> Self {
        Self {
            name: product.name.as_str(),
            description: product.description.as_str(),
            category: product.category.as_ref().map(CategoryName::as_str),
            price: product.price.get().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_row_into_domain() {
        let row = Product {
            id: 3,
            name: "Soccer Ball".into(),
            description: "FIFA-approved size and weight".into(),
            category: Some("Soccer".into()),
            price: "19.50".into(),
        };
        let domain = DomainProduct::try_from(row).expect("valid product");
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.name.as_str(), "Soccer Ball");
        assert_eq!(domain.category.as_deref(), Some("Soccer"));
        assert_eq!(domain.price.to_string(), "19.50");
    }

    #[test]
    fn blank_category_becomes_uncategorized() {
        let row = Product {
            id: 1,
            name: "Gift card".into(),
            description: String::new(),
            category: Some(String::new()),
            price: "10".into(),
        };
        let domain = DomainProduct::try_from(row).expect("valid product");
        assert!(domain.category.is_none());
    }

    #[test]
    fn malformed_price_is_rejected() {
        let row = Product {
            id: 1,
            name: "Kayak".into(),
            description: String::new(),
            category: None,
            price: "lots".into(),
        };
        assert!(matches!(
            DomainProduct::try_from(row),
            Err(TypeConstraintError::InvalidPrice(_))
        ));
    }

    #[test]
    fn from_domain_into_insertable() {
        let domain = DomainProduct::new(
            ProductId::new(9).expect("valid id"),
            ProductName::new("Lifejacket").expect("valid name"),
            ProductDescription::new("Protective and fashionable"),
            Some(CategoryName::new("Watersports").expect("valid category")),
            "48.95".parse().expect("valid price"),
        );
        let new: NewProduct = (&domain).into();
        assert_eq!(new.name, "Lifejacket");
        assert_eq!(new.category, Some("Watersports"));
        assert_eq!(new.price, "48.95");
    }
}
