use async_trait::async_trait;
use classroom_ghapi_interface::types::GhCollaborator;
use shaku::{Component, Interface};

use crate::{
    pagination::{fetch_all_pages, PAGE_SIZE},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListRepositoryCollaboratorsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        owner: &str,
        name: &str,
    ) -> Result<Vec<GhCollaborator>>;
}

#[derive(Component)]
#[shaku(interface = ListRepositoryCollaboratorsInterface)]
pub(crate) struct ListRepositoryCollaborators;

#[async_trait]
impl ListRepositoryCollaboratorsInterface for ListRepositoryCollaborators {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        owner: &str,
        name: &str,
    ) -> Result<Vec<GhCollaborator>> {
        fetch_all_pages(|page| {
            ctx.api_service
                .repository_collaborators_list(owner, name, PAGE_SIZE, page)
        })
        .await
        .map_err(Into::into)
    }
}
