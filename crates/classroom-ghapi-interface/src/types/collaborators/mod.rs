mod collaborator;
mod collaborator_permissions;
mod repository_permission;

pub use collaborator::GhCollaborator;
pub use collaborator_permissions::GhCollaboratorPermissions;
pub use repository_permission::GhRepositoryPermission;
