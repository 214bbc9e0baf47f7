use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures reported by the service layer.
///
/// A missing customer is not an error here: lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input violated a domain value constraint.
    #[error("{0}")]
    TypeConstraint(String),

    /// Storage failed while serving the request.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
