//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Number of products shown per catalog page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 4;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// SQLite database path. Without it the built-in sample catalog is served.
    #[serde(default)]
    pub database_url: Option<String>,
    pub templates_dir: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}
