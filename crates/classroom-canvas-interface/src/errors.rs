//! Canvas API errors.

use thiserror::Error;

/// Canvas API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `CanvasError`.
pub type Result<T, E = CanvasError> = core::result::Result<T, E>;
