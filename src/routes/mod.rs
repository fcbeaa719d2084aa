//! Actix-web handlers and shared response helpers.

use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod api;
pub mod catalog;
pub mod html;
pub mod navigation;

/// Registers every storefront route. Shared by `run` and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(api::api_v1_products)
            .service(api::api_v1_categories),
    )
    .service(navigation::menu)
    .service(catalog::list_products);
}

/// Renders `template` or logs the failure and answers with a 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a service failure onto an HTTP status.
pub fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            log::warn!("Rejected request to {action}: {message}");
            HttpResponse::BadRequest().body(message)
        }
        ServiceError::Repository(err) => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
