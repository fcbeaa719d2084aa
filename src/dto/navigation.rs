//! DTOs used by the category navigation menu.

use serde::Serialize;

use crate::domain::types::CategoryName;

/// Data required to render the category menu.
#[derive(Debug, Serialize)]
pub struct CategoryMenu {
    /// Distinct categories in ascending order.
    pub categories: Vec<CategoryName>,
    /// Currently selected category, passed through untouched for highlighting.
    pub selected_category: Option<String>,
}
