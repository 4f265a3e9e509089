pub(crate) mod list_organization_repositories;

pub use list_organization_repositories::ListOrganizationRepositoriesInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::list_organization_repositories::MockListOrganizationRepositoriesInterface;
