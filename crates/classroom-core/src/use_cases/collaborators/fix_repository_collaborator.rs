use async_trait::async_trait;
use classroom_ghapi_interface::types::{GhRepository, GhRepositoryPermission};
use shaku::{Component, HasComponent, Interface};

use super::{
    check_collaborator_permission, ListRepositoryCollaboratorsInterface, UsernamePattern,
};
use crate::{CoreContext, Result};

/// Settings of a collaborator reconciliation run.
#[derive(Debug, Clone)]
pub struct FixCollaboratorsOptions {
    /// Organization owning the repositories.
    pub organization: String,
    /// Pattern extracting the expected collaborator from a repository name.
    pub username_pattern: UsernamePattern,
    /// Minimum permission the collaborator should hold.
    pub permission: GhRepositoryPermission,
    /// Evaluate without granting anything.
    pub dry_run: bool,
}

/// What happened to a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryFixOutcome {
    /// The repository name did not yield a username.
    SkippedNoMatch,
    /// The collaborator already holds the permission.
    AlreadySatisfied { username: String },
    /// The permission was granted.
    Granted { username: String },
    /// The permission would have been granted without dry run.
    WouldGrant { username: String },
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FixRepositoryCollaboratorInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        options: &FixCollaboratorsOptions,
        repository: &GhRepository,
    ) -> Result<RepositoryFixOutcome>;
}

#[derive(Component)]
#[shaku(interface = FixRepositoryCollaboratorInterface)]
pub(crate) struct FixRepositoryCollaborator;

#[async_trait]
impl FixRepositoryCollaboratorInterface for FixRepositoryCollaborator {
    #[tracing::instrument(
        skip(self, ctx, options, repository),
        fields(repository = %repository.full_name)
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        options: &FixCollaboratorsOptions,
        repository: &GhRepository,
    ) -> Result<RepositoryFixOutcome> {
        let Some(username) = options.username_pattern.extract(&repository.name) else {
            tracing::debug!("Skipping repository {} (No match)", repository.full_name);
            return Ok(RepositoryFixOutcome::SkippedNoMatch);
        };

        let list_collaborators: &dyn ListRepositoryCollaboratorsInterface =
            ctx.core_module.resolve_ref();
        let collaborators = list_collaborators
            .run(ctx, &options.organization, &repository.name)
            .await?;

        let permissions = collaborators
            .iter()
            .find(|collaborator| collaborator.login == username)
            .and_then(|collaborator| collaborator.permissions.as_ref());

        if check_collaborator_permission(permissions, options.permission) {
            tracing::debug!(
                "Skipping repository {} (User {} already has the desired permission {})",
                repository.full_name,
                username,
                options.permission
            );
            return Ok(RepositoryFixOutcome::AlreadySatisfied { username });
        }

        if options.dry_run {
            tracing::info!(
                "Would grant permission {} to user {} on repository {}",
                options.permission,
                username,
                repository.full_name
            );
            return Ok(RepositoryFixOutcome::WouldGrant { username });
        }

        ctx.api_service
            .repository_collaborators_add(
                &options.organization,
                &repository.name,
                &username,
                options.permission,
            )
            .await?;

        tracing::info!("Fixed collaborators for repository {}", repository.full_name);
        Ok(RepositoryFixOutcome::Granted { username })
    }
}
