use async_trait::async_trait;
use classroom_ghapi_interface::types::GhRepository;
use shaku::{Component, Interface};

use crate::{
    pagination::{fetch_all_pages, PAGE_SIZE},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListOrganizationRepositoriesInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, organization: &str)
        -> Result<Vec<GhRepository>>;
}

#[derive(Component)]
#[shaku(interface = ListOrganizationRepositoriesInterface)]
pub(crate) struct ListOrganizationRepositories;

#[async_trait]
impl ListOrganizationRepositoriesInterface for ListOrganizationRepositories {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        organization: &str,
    ) -> Result<Vec<GhRepository>> {
        let repositories = fetch_all_pages(|page| {
            ctx.api_service
                .org_repositories_list(organization, PAGE_SIZE, page)
        })
        .await?;

        tracing::debug!(count = repositories.len(), "Listed organization repositories");
        Ok(repositories)
    }
}
