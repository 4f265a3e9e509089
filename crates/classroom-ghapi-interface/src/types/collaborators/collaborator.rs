use serde::{Deserialize, Serialize};

use super::GhCollaboratorPermissions;

/// GitHub repository collaborator.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhCollaborator {
    /// Username.
    pub login: String,
    /// Permissions, absent when the listing omits them.
    #[serde(default)]
    pub permissions: Option<GhCollaboratorPermissions>,
}
