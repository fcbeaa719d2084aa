//! Form and query-string definitions backing the storefront routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod catalog;

#[derive(Debug, Error)]
/// Errors that can occur when processing request input.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid page size")]
    InvalidPageSize,
}
