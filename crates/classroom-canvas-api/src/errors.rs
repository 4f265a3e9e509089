use classroom_canvas_interface::CanvasError;

/// Canvas adapter error.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names, missing_docs)]
pub enum CanvasApiError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid authentication token")]
    InvalidToken {
        source: http::header::InvalidHeaderValue,
    },

    #[error("Invalid Canvas URL: {url}")]
    InvalidUrl { url: String },

    #[error("Refusing to follow pagination link to another origin: {url}")]
    ForeignNextLink { url: String },
}

impl From<reqwest::Error> for CanvasApiError {
    fn from(e: reqwest::Error) -> Self {
        CanvasApiError::HttpError { source: e }
    }
}

impl From<CanvasApiError> for CanvasError {
    fn from(e: CanvasApiError) -> Self {
        CanvasError::ImplementationError { source: e.into() }
    }
}
