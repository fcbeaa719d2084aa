//! Database and configuration models shared across the catalog.

#[cfg(feature = "server")]
pub mod config;
pub mod product;
