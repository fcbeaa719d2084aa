//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use sports_store::db::{ConnectionOptions, DbPool, build_pool};
use sports_store::models::product::NewProduct;
use sports_store::schema::products;
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Temporary SQLite database with the schema applied.
///
/// The backing directory is removed when the value is dropped.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let database_url = path.to_string_lossy().to_string();

        let pool = build_pool(
            &database_url,
            ConnectionOptions {
                enable_wal: false,
                query_only: false,
                busy_timeout: Some(Duration::from_secs(5)),
            },
        )
        .expect("build pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Inserts `(name, category, price)` rows in order, so ids start at 1.
    pub fn insert_products(&self, rows: &[(&str, Option<&str>, &str)]) {
        let mut conn = self.pool.get().expect("get connection");
        let new_products = rows
            .iter()
            .map(|&(name, category, price)| NewProduct {
                name,
                description: "",
                category,
                price: price.to_string(),
            })
            .collect::<Vec<_>>();
        diesel::insert_into(products::table)
            .values(&new_products)
            .execute(&mut conn)
            .expect("insert products");
    }
}
