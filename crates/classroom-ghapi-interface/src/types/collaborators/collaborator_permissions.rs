use serde::{Deserialize, Serialize};

use super::GhRepositoryPermission;

/// Permission flags of a repository collaborator.
///
/// Flags missing from the upstream payload are read as `false`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GhCollaboratorPermissions {
    /// Pull.
    pub pull: bool,
    /// Triage.
    pub triage: bool,
    /// Push.
    pub push: bool,
    /// Maintain.
    pub maintain: bool,
    /// Admin.
    pub admin: bool,
}

impl GhCollaboratorPermissions {
    /// Get the flag for a permission.
    pub fn has(&self, permission: GhRepositoryPermission) -> bool {
        match permission {
            GhRepositoryPermission::Pull => self.pull,
            GhRepositoryPermission::Triage => self.triage,
            GhRepositoryPermission::Push => self.push,
            GhRepositoryPermission::Maintain => self.maintain,
            GhRepositoryPermission::Admin => self.admin,
        }
    }

    /// Strongest permission whose flag is set.
    ///
    /// Lower flags are not required to be set: `{ pull: false, admin: true }`
    /// is held as `admin`.
    pub fn highest(&self) -> Option<GhRepositoryPermission> {
        GhRepositoryPermission::ALL
            .into_iter()
            .rev()
            .find(|permission| self.has(*permission))
    }

    /// Check if the held permissions reach `required`.
    pub fn satisfies(&self, required: GhRepositoryPermission) -> bool {
        self.highest()
            .map(|held| held.rank() >= required.rank())
            .unwrap_or(false)
    }
}
