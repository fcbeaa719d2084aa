use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::dto::catalog::ProductView;
use crate::forms::catalog::CatalogQueryForm;
use crate::models::config::ServerConfig;
use crate::repository::DynProductReader;
use crate::routes::html::{catalog_page_url, page_links};
use crate::routes::{error_response, render_template};
use crate::services::{catalog as catalog_service, navigation as navigation_service};

#[get("/")]
pub async fn list_products(
    web::Query(form): web::Query<CatalogQueryForm>,
    repo: web::Data<DynProductReader>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let selected_category = form.category.clone();

    let listing =
        match catalog_service::list_products(repo.get_ref(), form, server_config.page_size) {
            Ok(listing) => listing,
            Err(err) => return error_response(err, "list products"),
        };

    let menu = match navigation_service::load_menu(repo.get_ref(), selected_category) {
        Ok(menu) => menu,
        Err(err) => return error_response(err, "load categories"),
    };

    let category = listing.current_category.as_ref();
    let links = page_links(&listing.paging_info, |page| catalog_page_url(category, page));
    let products = listing
        .products
        .iter()
        .map(ProductView::from)
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("products", &products);
    context.insert("paging_info", &listing.paging_info);
    context.insert("current_category", &listing.current_category);
    context.insert("page_links", &links);
    context.insert("menu", &menu);

    render_template(&tera, "products/list.html", &context)
}
