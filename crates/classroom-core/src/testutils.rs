use std::{collections::BTreeMap, sync::RwLock};

use async_trait::async_trait;
use classroom_ghapi_interface::{
    types::{
        GhCollaborator, GhCollaboratorPermissions, GhRepository, GhRepositoryPermission, GhUser,
    },
    ApiError, ApiService, Result,
};

/// In-memory organization, applying grants to its own state.
pub(crate) struct MemoryApiService {
    organization: String,
    repositories: RwLock<BTreeMap<String, Vec<GhCollaborator>>>,
    grants: RwLock<usize>,
}

impl MemoryApiService {
    pub fn new(organization: &str, repositories: Vec<(&str, Vec<GhCollaborator>)>) -> Self {
        Self {
            organization: organization.into(),
            repositories: RwLock::new(
                repositories
                    .into_iter()
                    .map(|(name, collaborators)| (name.to_owned(), collaborators))
                    .collect(),
            ),
            grants: RwLock::new(0),
        }
    }

    pub fn grant_count(&self) -> usize {
        *self.grants.read().unwrap()
    }

    fn page<T: Clone>(items: &[T], per_page: u64, page: u64) -> Vec<T> {
        items
            .iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .cloned()
            .collect()
    }

    fn not_found(path: String) -> ApiError {
        ApiError::ImplementationError {
            source: format!("Not found: {path}").into(),
        }
    }
}

#[async_trait]
impl ApiService for MemoryApiService {
    async fn org_repositories_list(
        &self,
        org: &str,
        per_page: u64,
        page: u64,
    ) -> Result<Vec<GhRepository>> {
        if org != self.organization {
            return Err(Self::not_found(format!("/orgs/{org}")));
        }

        let repositories: Vec<_> = self
            .repositories
            .read()
            .unwrap()
            .keys()
            .map(|name| GhRepository {
                name: name.clone(),
                full_name: format!("{org}/{name}"),
                owner: GhUser { login: org.into() },
            })
            .collect();

        Ok(Self::page(&repositories, per_page, page))
    }

    async fn repository_collaborators_list(
        &self,
        owner: &str,
        name: &str,
        per_page: u64,
        page: u64,
    ) -> Result<Vec<GhCollaborator>> {
        let repositories = self.repositories.read().unwrap();
        match repositories.get(name) {
            Some(collaborators) if owner == self.organization => {
                Ok(Self::page(collaborators, per_page, page))
            }
            _ => Err(Self::not_found(format!("/repos/{owner}/{name}"))),
        }
    }

    async fn repository_collaborators_add(
        &self,
        owner: &str,
        name: &str,
        username: &str,
        permission: GhRepositoryPermission,
    ) -> Result<()> {
        let mut repositories = self.repositories.write().unwrap();
        let collaborators = match repositories.get_mut(name) {
            Some(collaborators) if owner == self.organization => collaborators,
            _ => return Err(Self::not_found(format!("/repos/{owner}/{name}"))),
        };

        let mut permissions = GhCollaboratorPermissions::default();
        for level in GhRepositoryPermission::ALL {
            if level <= permission {
                match level {
                    GhRepositoryPermission::Pull => permissions.pull = true,
                    GhRepositoryPermission::Triage => permissions.triage = true,
                    GhRepositoryPermission::Push => permissions.push = true,
                    GhRepositoryPermission::Maintain => permissions.maintain = true,
                    GhRepositoryPermission::Admin => permissions.admin = true,
                }
            }
        }

        match collaborators.iter_mut().find(|c| c.login == username) {
            Some(collaborator) => collaborator.permissions = Some(permissions),
            None => collaborators.push(GhCollaborator {
                login: username.into(),
                permissions: Some(permissions),
            }),
        }

        *self.grants.write().unwrap() += 1;
        Ok(())
    }
}
