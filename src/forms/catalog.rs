//! Query parameters accepted by the catalog pages.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::CategoryName;
use crate::forms::FormError;

/// Raw `?category=..&page=..` query as received from the client.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct CatalogQueryForm {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub page: Option<usize>,
}

impl CatalogQueryForm {
    pub fn new(category: Option<&str>, page: Option<usize>) -> Self {
        Self {
            category: category.map(str::to_string),
            page,
        }
    }
}

/// Validated catalog query.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogQuery {
    /// `None` when the client asked for every category.
    pub category: Option<CategoryName>,
    /// 1-based page, defaulting to the first one.
    pub page: usize,
}

impl TryFrom<CatalogQueryForm> for CatalogQuery {
    type Error = FormError;

    fn try_from(form: CatalogQueryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            category: CategoryName::parse_optional(form.category),
            page: form.page.unwrap_or(1),
        })
    }
}

/// Query string emitted for pagination links.
#[derive(Debug, Serialize)]
pub struct CatalogPageLink<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    pub page: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_page_defaults_to_first() {
        let query = CatalogQuery::try_from(CatalogQueryForm::default()).expect("valid query");
        assert_eq!(query.page, 1);
        assert!(query.category.is_none());
    }

    #[test]
    fn empty_category_means_all_categories() {
        let form = CatalogQueryForm::new(Some(""), Some(2));
        let query = CatalogQuery::try_from(form).expect("valid query");
        assert!(query.category.is_none());
        assert_eq!(query.page, 2);
    }

    #[test]
    fn category_is_kept_verbatim() {
        let form = CatalogQueryForm::new(Some("Cat2"), None);
        let query = CatalogQuery::try_from(form).expect("valid query");
        assert_eq!(query.category.as_deref(), Some("Cat2"));
    }

    #[test]
    fn page_zero_is_rejected() {
        let form = CatalogQueryForm::new(None, Some(0));
        assert!(matches!(
            CatalogQuery::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn page_link_omits_missing_category() {
        let link = CatalogPageLink {
            category: None,
            page: 3,
        };
        assert_eq!(serde_html_form::to_string(&link).expect("encode"), "page=3");

        let link = CatalogPageLink {
            category: Some("Water Sports"),
            page: 1,
        };
        assert_eq!(
            serde_html_form::to_string(&link).expect("encode"),
            "category=Water+Sports&page=1"
        );
    }
}
