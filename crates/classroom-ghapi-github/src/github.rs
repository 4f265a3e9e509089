//! GitHub adapter

use async_trait::async_trait;
use classroom_config::Config;
use classroom_ghapi_interface::{
    types::{GhCollaborator, GhRepository, GhRepositoryPermission},
    ApiError, ApiService, Result,
};
use reqwest::Client;
use serde::Serialize;

use crate::auth::{build_github_url, get_authenticated_client_builder};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client> {
        get_authenticated_client_builder(&self.config)?
            .build()
            .map_err(into_api_error)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn org_repositories_list(
        &self,
        org: &str,
        per_page: u64,
        page: u64,
    ) -> Result<Vec<GhRepository>> {
        let response = self
            .get_client()?
            .get(self.build_url(format!("/orgs/{org}/repos")))
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .await
            .map_err(into_api_error)?
            .error_for_status()
            .map_err(into_api_error)?
            .json::<Vec<GhRepository>>()
            .await
            .map_err(into_api_error)?;

        tracing::debug!(count = response.len(), "Fetched repositories page");
        Ok(response)
    }

    #[tracing::instrument(skip(self))]
    async fn repository_collaborators_list(
        &self,
        owner: &str,
        name: &str,
        per_page: u64,
        page: u64,
    ) -> Result<Vec<GhCollaborator>> {
        let response = self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/collaborators")))
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .await
            .map_err(into_api_error)?
            .error_for_status()
            .map_err(into_api_error)?
            .json::<Vec<GhCollaborator>>()
            .await
            .map_err(into_api_error)?;

        tracing::debug!(count = response.len(), "Fetched collaborators page");
        Ok(response)
    }

    #[tracing::instrument(skip(self))]
    async fn repository_collaborators_add(
        &self,
        owner: &str,
        name: &str,
        username: &str,
        permission: GhRepositoryPermission,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Request {
            permission: GhRepositoryPermission,
        }

        self.get_client()?
            .put(self.build_url(format!(
                "/repos/{owner}/{name}/collaborators/{username}"
            )))
            .json(&Request { permission })
            .send()
            .await
            .map_err(into_api_error)?
            .error_for_status()
            .map_err(into_api_error)?;

        Ok(())
    }
}

fn into_api_error(e: reqwest::Error) -> ApiError {
    crate::GitHubError::from(e).into()
}
