//! Logic errors.

use thiserror::Error;

use crate::roster::RosterError;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`regex::Error`].
    #[error("Error while compiling regex: {source}")]
    RegexError { source: regex::Error },

    /// Wraps [`classroom_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: classroom_ghapi_interface::ApiError,
    },

    /// Wraps [`classroom_canvas_interface::CanvasError`].
    #[error("Canvas API error: {source}")]
    CanvasError {
        source: classroom_canvas_interface::CanvasError,
    },

    /// Wraps [`RosterError`].
    #[error("Roster error: {source}")]
    RosterError { source: RosterError },
}

impl From<regex::Error> for DomainError {
    fn from(e: regex::Error) -> Self {
        Self::RegexError { source: e }
    }
}

impl From<classroom_ghapi_interface::ApiError> for DomainError {
    fn from(e: classroom_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<classroom_canvas_interface::CanvasError> for DomainError {
    fn from(e: classroom_canvas_interface::CanvasError) -> Self {
        Self::CanvasError { source: e }
    }
}

impl From<RosterError> for DomainError {
    fn from(e: RosterError) -> Self {
        Self::RosterError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
