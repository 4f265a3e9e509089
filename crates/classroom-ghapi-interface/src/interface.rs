use async_trait::async_trait;

use crate::{
    types::{GhCollaborator, GhRepository, GhRepositoryPermission},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List one page of repositories from an organization.
    async fn org_repositories_list(
        &self,
        org: &str,
        per_page: u64,
        page: u64,
    ) -> Result<Vec<GhRepository>>;
    /// List one page of collaborators from a repository.
    async fn repository_collaborators_list(
        &self,
        owner: &str,
        name: &str,
        per_page: u64,
        page: u64,
    ) -> Result<Vec<GhCollaborator>>;
    /// Add a collaborator to a repository, or update its permission.
    ///
    /// Absent users receive an invitation, existing collaborators are
    /// updated in place.
    async fn repository_collaborators_add(
        &self,
        owner: &str,
        name: &str,
        username: &str,
        permission: GhRepositoryPermission,
    ) -> Result<()>;
}
