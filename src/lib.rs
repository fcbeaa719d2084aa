#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{DieselRepository, DynProductReader, InMemoryRepository};

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Picks the product source: the configured SQLite database, or the built-in
/// sample catalog when no database is configured.
#[cfg(feature = "server")]
pub fn build_repository(server_config: &ServerConfig) -> std::io::Result<Arc<DynProductReader>> {
    match &server_config.database_url {
        Some(database_url) => {
            let pool = establish_connection_pool(database_url).map_err(|e| {
                std::io::Error::other(format!("Failed to establish database connection: {e}"))
            })?;
            let repo: Arc<DynProductReader> = Arc::new(DieselRepository::new(pool));
            Ok(repo)
        }
        None => {
            log::warn!("No database_url configured, serving the sample catalog");
            let repo = InMemoryRepository::sample()
                .map_err(|e| std::io::Error::other(format!("Invalid sample catalog: {e}")))?;
            let repo: Arc<DynProductReader> = Arc::new(repo);
            Ok(repo)
        }
    }
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    if server_config.page_size == 0 {
        return Err(std::io::Error::other("page_size must be greater than zero"));
    }

    let repo = build_repository(&server_config)?;

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving catalog on {}:{} with {} products per page",
        bind_address.0,
        bind_address.1,
        server_config.page_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .configure(routes::configure)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::from(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
