//! Types shared across annotation backends.

use thiserror::Error;

use super::super::classifier::ModelError;

/// Errors from annotation backends.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// A classifier failed to load while building the backend.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Backend-specific failure.
    #[error("annotation failed: {0}")]
    Failed(String),
}
