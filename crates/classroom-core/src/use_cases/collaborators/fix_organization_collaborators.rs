use std::fmt;

use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use super::{FixCollaboratorsOptions, FixRepositoryCollaboratorInterface, RepositoryFixOutcome};
use crate::{
    use_cases::repositories::ListOrganizationRepositoriesInterface, CoreContext, Result,
};

/// Outcome for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryFixReport {
    /// Repository full name.
    pub repository: String,
    pub outcome: RepositoryFixOutcome,
}

/// Outcomes of a reconciliation run, in repository order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixCollaboratorsReport {
    pub repositories: Vec<RepositoryFixReport>,
}

impl FixCollaboratorsReport {
    fn count<F: Fn(&RepositoryFixOutcome) -> bool>(&self, filter: F) -> usize {
        self.repositories
            .iter()
            .filter(|report| filter(&report.outcome))
            .count()
    }

    pub fn granted(&self) -> usize {
        self.count(|o| matches!(o, RepositoryFixOutcome::Granted { .. }))
    }

    pub fn would_grant(&self) -> usize {
        self.count(|o| matches!(o, RepositoryFixOutcome::WouldGrant { .. }))
    }

    pub fn already_satisfied(&self) -> usize {
        self.count(|o| matches!(o, RepositoryFixOutcome::AlreadySatisfied { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RepositoryFixOutcome::SkippedNoMatch))
    }
}

impl fmt::Display for FixCollaboratorsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} repositories: {} granted, {} already satisfied, {} skipped",
            self.repositories.len(),
            self.granted(),
            self.already_satisfied(),
            self.skipped()
        )?;

        let would_grant = self.would_grant();
        if would_grant > 0 {
            write!(f, ", {would_grant} would be granted")?;
        }

        Ok(())
    }
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait FixOrganizationCollaboratorsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        options: &FixCollaboratorsOptions,
    ) -> Result<FixCollaboratorsReport>;
}

#[derive(Component)]
#[shaku(interface = FixOrganizationCollaboratorsInterface)]
pub(crate) struct FixOrganizationCollaborators;

#[async_trait]
impl FixOrganizationCollaboratorsInterface for FixOrganizationCollaborators {
    #[tracing::instrument(
        skip(self, ctx, options),
        fields(
            organization = %options.organization,
            pattern = options.username_pattern.as_str(),
            permission = %options.permission,
            dry_run = options.dry_run
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        options: &FixCollaboratorsOptions,
    ) -> Result<FixCollaboratorsReport> {
        let list_repositories: &dyn ListOrganizationRepositoriesInterface =
            ctx.core_module.resolve_ref();
        let fix_repository: &dyn FixRepositoryCollaboratorInterface =
            ctx.core_module.resolve_ref();

        let repositories = list_repositories.run(ctx, &options.organization).await?;
        tracing::info!(
            "Found {} repositories in organization {}",
            repositories.len(),
            options.organization
        );

        let mut report = FixCollaboratorsReport::default();
        for repository in repositories {
            let outcome = fix_repository.run(ctx, options, &repository).await?;
            report.repositories.push(RepositoryFixReport {
                repository: repository.full_name,
                outcome,
            });
        }

        Ok(report)
    }
}
