//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod pagination;
pub mod roster;
#[cfg(test)]
mod testutils;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    collaborators::{
        fix_organization_collaborators::FixOrganizationCollaborators,
        fix_repository_collaborator::FixRepositoryCollaborator,
        list_repository_collaborators::ListRepositoryCollaborators,
    },
    repositories::list_organization_repositories::ListOrganizationRepositories,
    roster::{build_roster::BuildRoster, create_roster::CreateRoster},
};

module! {
    pub CoreModule {
        components = [
            ListOrganizationRepositories, ListRepositoryCollaborators,
            FixRepositoryCollaborator, FixOrganizationCollaborators,
            BuildRoster, CreateRoster
        ],
        providers = []
    }
}
