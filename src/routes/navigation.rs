use actix_web::{Responder, get, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::repository::DynProductReader;
use crate::routes::{error_response, render_template};
use crate::services::navigation as navigation_service;

#[derive(Deserialize)]
struct MenuQueryParams {
    category: Option<String>,
}

/// Category menu partial, fetched by the layout.
#[get("/nav/menu")]
pub async fn menu(
    params: web::Query<MenuQueryParams>,
    repo: web::Data<DynProductReader>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    match navigation_service::load_menu(repo.get_ref(), params.category) {
        Ok(menu) => {
            let mut context = Context::new();
            context.insert("menu", &menu);
            render_template(&tera, "navigation/menu.html", &context)
        }
        Err(err) => error_response(err, "load categories"),
    }
}
