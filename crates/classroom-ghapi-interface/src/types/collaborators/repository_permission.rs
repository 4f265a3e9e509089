use serde::{Deserialize, Serialize};

/// GitHub repository permission, ordered from weakest to strongest.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GhRepositoryPermission {
    /// Pull.
    Pull,
    /// Triage.
    Triage,
    /// Push.
    Push,
    /// Maintain.
    Maintain,
    /// Admin.
    Admin,
}

serde_plain::derive_display_from_serialize!(GhRepositoryPermission);
serde_plain::derive_fromstr_from_deserialize!(GhRepositoryPermission);

impl GhRepositoryPermission {
    /// Every permission, weakest first.
    pub const ALL: [Self; 5] = [
        Self::Pull,
        Self::Triage,
        Self::Push,
        Self::Maintain,
        Self::Admin,
    ];

    /// Position in the permission ladder (`pull` is 0).
    pub fn rank(self) -> usize {
        self as usize
    }
}
