mod check_collaborator_permission;
pub(crate) mod fix_organization_collaborators;
pub(crate) mod fix_repository_collaborator;
pub(crate) mod list_repository_collaborators;
mod username_pattern;

pub use check_collaborator_permission::check_collaborator_permission;
pub use fix_organization_collaborators::{
    FixCollaboratorsReport, FixOrganizationCollaboratorsInterface, RepositoryFixReport,
};
pub use fix_repository_collaborator::{
    FixCollaboratorsOptions, FixRepositoryCollaboratorInterface, RepositoryFixOutcome,
};
pub use list_repository_collaborators::ListRepositoryCollaboratorsInterface;
pub use username_pattern::UsernamePattern;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    fix_organization_collaborators::MockFixOrganizationCollaboratorsInterface,
    fix_repository_collaborator::MockFixRepositoryCollaboratorInterface,
    list_repository_collaborators::MockListRepositoryCollaboratorsInterface,
};
