//! Business operations behind the storefront routes.
//!
//! Every service is generic over the repository traits so it can run against
//! the Diesel repository, the in-memory catalog, or a mock.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod catalog;
pub mod navigation;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request input failed validation.
    #[error("invalid request: {0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
