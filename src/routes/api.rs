use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::catalog::CatalogQueryForm;
use crate::models::config::ServerConfig;
use crate::repository::DynProductReader;
use crate::routes::error_response;
use crate::services::{catalog as catalog_service, navigation as navigation_service};

#[get("/v1/products")]
pub async fn api_v1_products(
    web::Query(form): web::Query<CatalogQueryForm>,
    repo: web::Data<DynProductReader>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match catalog_service::list_products(repo.get_ref(), form, server_config.page_size) {
        Ok(listing) => HttpResponse::Ok().json(listing),
        Err(err) => error_response(err, "list products"),
    }
}

#[get("/v1/categories")]
pub async fn api_v1_categories(repo: web::Data<DynProductReader>) -> impl Responder {
    match navigation_service::load_menu(repo.get_ref(), None) {
        Ok(menu) => HttpResponse::Ok().json(menu.categories),
        Err(err) => error_response(err, "load categories"),
    }
}
