//! HTML fragments built outside of templates.

use std::fmt::Write;

use tera::escape_html;

use crate::domain::types::CategoryName;
use crate::forms::catalog::CatalogPageLink;
use crate::pagination::PagingInfo;

/// Renders one anchor per page, marking the current page as `selected`.
///
/// `page_url` maps a page number to its URL.
pub fn page_links<F>(paging_info: &PagingInfo, page_url: F) -> String
where
    F: Fn(usize) -> String,
{
    let mut html = String::new();
    for page in 1..=paging_info.total_pages {
        let href = escape_html(&page_url(page));
        let class = if page == paging_info.current_page {
            r#" class="selected""#
        } else {
            ""
        };
        // Writing into a String cannot fail.
        let _ = write!(html, r#"<a{class} href="{href}">{page}</a>"#);
    }
    html
}

/// URL of a catalog page, keeping the active category filter.
pub fn catalog_page_url(category: Option<&CategoryName>, page: usize) -> String {
    let link = CatalogPageLink {
        category: category.map(CategoryName::as_str),
        page,
    };
    match serde_html_form::to_string(&link) {
        Ok(query) => format!("/?{query}"),
        Err(err) => {
            log::error!("Failed to encode page link: {err}");
            format!("/?page={page}")
        }
    }
}
