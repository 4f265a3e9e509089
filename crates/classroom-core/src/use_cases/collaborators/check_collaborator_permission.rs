use classroom_ghapi_interface::types::{GhCollaboratorPermissions, GhRepositoryPermission};

/// Check if a collaborator already holds at least `required`.
///
/// Missing permissions never satisfy anything.
pub fn check_collaborator_permission(
    permissions: Option<&GhCollaboratorPermissions>,
    required: GhRepositoryPermission,
) -> bool {
    permissions
        .map(|permissions| permissions.satisfies(required))
        .unwrap_or(false)
}
