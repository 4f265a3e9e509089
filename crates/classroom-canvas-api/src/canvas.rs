//! Canvas adapter

use async_trait::async_trait;
use classroom_canvas_interface::{types::CanvasUser, CanvasError, CanvasService, Result};
use classroom_config::Config;
use http::header;
use reqwest::{Client, Url};

use crate::{
    auth::{build_canvas_url, get_authenticated_client_builder},
    errors::CanvasApiError,
    link::next_page_link,
    pages::{fetch_linked_pages, LinkedPage},
};

const PAGE_SIZE: &str = "100";

/// Canvas API adapter implementation.
#[derive(Clone)]
pub struct CanvasApiService {
    config: Config,
}

impl CanvasApiService {
    /// Creates new Canvas API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(into_canvas_error)
    }

    /// Read a listing from `first_url`, following `next` links on the same origin.
    async fn list_all<T>(&self, client: &Client, first_url: Url) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        let configured = first_url.clone();

        fetch_linked_pages(first_url, |url| {
            let request = client.get(url);
            let configured = &configured;

            async move {
                let response = request
                    .send()
                    .await
                    .map_err(into_canvas_error)?
                    .error_for_status()
                    .map_err(into_canvas_error)?;

                let link = response
                    .headers()
                    .get(header::LINK)
                    .and_then(|value| value.to_str().ok());
                let next_url = next_page_link(link, configured)?;

                let items = response
                    .json::<Vec<T>>()
                    .await
                    .map_err(into_canvas_error)?;
                tracing::debug!(count = items.len(), "Fetched page");

                Ok::<_, CanvasError>(LinkedPage { items, next_url })
            }
        })
        .await
    }
}

#[async_trait]
impl CanvasService for CanvasApiService {
    #[tracing::instrument(skip(self))]
    async fn course_users_list(
        &self,
        course_id: &str,
        enrollment_types: &[String],
        enrollment_states: &[String],
    ) -> Result<Vec<CanvasUser>> {
        let client = self.get_client()?;
        let url = build_canvas_url(&self.config, format!("/courses/{course_id}/users"))?;

        let query: Vec<(&str, &str)> = enrollment_types
            .iter()
            .map(|t| ("enrollment_type[]", t.as_str()))
            .chain(
                enrollment_states
                    .iter()
                    .map(|s| ("enrollment_state[]", s.as_str())),
            )
            .chain(std::iter::once(("per_page", PAGE_SIZE)))
            .collect();

        let first_url = Url::parse_with_params(&url, &query)
            .map_err(|_| CanvasApiError::InvalidUrl { url })?;
        self.list_all(&client, first_url).await
    }
}

fn into_canvas_error(e: reqwest::Error) -> CanvasError {
    CanvasApiError::from(e).into()
}
