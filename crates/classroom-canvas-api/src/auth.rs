//! Auth.

use std::time::Duration;

use classroom_config::Config;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;

use crate::errors::CanvasApiError;

const API_PREFIX: &str = "/api/v1";

/// Get an authenticated Canvas client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, CanvasApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    let mut authorization =
        header::HeaderValue::from_str(&format!("Bearer {}", config.api.canvas.token))
            .map_err(|e| CanvasApiError::InvalidToken { source: e })?;
    authorization.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.canvas.connect_timeout))
        .user_agent(format!("classroom-tools/{}", config.version))
        .default_headers(headers))
}

/// Build a Canvas REST API URL from the instance URL.
///
/// The instance URL may already carry the `/api/v1` prefix.
pub fn build_canvas_url<T: Into<String>>(config: &Config, path: T) -> Result<String, CanvasApiError> {
    let root = config.api.canvas.url.trim_end_matches('/');
    let root = root
        .strip_suffix(API_PREFIX)
        .unwrap_or(root)
        .trim_end_matches('/');
    if !root.starts_with("http://") && !root.starts_with("https://") {
        return Err(CanvasApiError::InvalidUrl {
            url: config.api.canvas.url.clone(),
        });
    }

    Ok(format!("{}{}{}", root, API_PREFIX, path.into()))
}
