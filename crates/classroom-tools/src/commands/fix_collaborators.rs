use async_trait::async_trait;
use clap::Parser;
use classroom_config::Config;
use classroom_core::use_cases::collaborators::{
    FixCollaboratorsOptions, FixOrganizationCollaboratorsInterface, UsernamePattern,
};
use classroom_ghapi_interface::types::GhRepositoryPermission;
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::{validation::RequiredSettings, Result};

/// Grant each student the expected permission on their repository
#[derive(Parser)]
pub(crate) struct FixCollaboratorsCommand {
    /// GitHub token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Organization owning the repositories
    #[arg(long, env = "GITHUB_ORGANIZATION_NAME")]
    github_organization_name: Option<String>,

    /// Pattern extracting the username from a repository name, with a single capture group (e.g. `^hw1-(.+)$`)
    #[arg(long, env = "GITHUB_REPOSITORY_USERNAME_PATTERN")]
    github_repository_username_pattern: Option<String>,

    /// Minimum permission of the student (pull, triage, push, maintain or admin)
    #[arg(long, env = "GITHUB_REPOSITORY_PERMISSION")]
    github_repository_permission: Option<GhRepositoryPermission>,

    /// Only report what would be granted
    #[arg(
        long,
        env = "GITHUB_DRY_RUN",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    dry_run: bool,
}

impl FixCollaboratorsCommand {
    pub fn configure(&self, config: &mut Config) {
        if let Some(token) = &self.github_token {
            config.api.github.token = token.clone();
        }
    }

    fn into_options(self) -> Result<FixCollaboratorsOptions> {
        match (
            self.github_token,
            self.github_organization_name,
            self.github_repository_username_pattern,
            self.github_repository_permission,
        ) {
            (Some(_), Some(organization), Some(pattern), Some(permission)) => {
                Ok(FixCollaboratorsOptions {
                    organization,
                    username_pattern: UsernamePattern::new(&pattern)?,
                    permission,
                    dry_run: self.dry_run,
                })
            }
            (token, organization, pattern, permission) => {
                let mut required = RequiredSettings::new("fix-collaborators");
                required
                    .check(&token, "github-token", "GITHUB_TOKEN")
                    .check(
                        &organization,
                        "github-organization-name",
                        "GITHUB_ORGANIZATION_NAME",
                    )
                    .check(
                        &pattern,
                        "github-repository-username-pattern",
                        "GITHUB_REPOSITORY_USERNAME_PATTERN",
                    )
                    .check(
                        &permission,
                        "github-repository-permission",
                        "GITHUB_REPOSITORY_PERMISSION",
                    );

                Err(required.into_error().into())
            }
        }
    }
}

#[async_trait]
impl Command for FixCollaboratorsCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let options = self.into_options()?;

        let fix_collaborators: &dyn FixOrganizationCollaboratorsInterface =
            ctx.core_module.resolve_ref();
        let report = fix_collaborators
            .run(&ctx.as_core_context(), &options)
            .await?;

        writeln!(ctx.writer.write().await, "{}", report)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use classroom_core::{
        use_cases::collaborators::{
            FixCollaboratorsReport, MockFixOrganizationCollaboratorsInterface,
            RepositoryFixOutcome, RepositoryFixReport,
        },
        CoreModule, DomainError,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        args::Args,
        testutils::{test_command, CommandContextTest},
        ValidationError,
    };

    fn empty_command() -> FixCollaboratorsCommand {
        FixCollaboratorsCommand {
            github_token: None,
            github_organization_name: None,
            github_repository_username_pattern: None,
            github_repository_permission: None,
            dry_run: false,
        }
    }

    #[tokio::test]
    async fn run() {
        let mut mock = MockFixOrganizationCollaboratorsInterface::new();
        mock.expect_run()
            .withf(|_, options| {
                options.organization == "classroom"
                    && options.username_pattern.as_str() == "^hw1-(.+)$"
                    && options.permission == GhRepositoryPermission::Push
                    && options.dry_run
            })
            .once()
            .return_once(|_, _| {
                Ok(FixCollaboratorsReport {
                    repositories: vec![
                        RepositoryFixReport {
                            repository: "classroom/hw1-alice99".into(),
                            outcome: RepositoryFixOutcome::WouldGrant {
                                username: "alice99".into(),
                            },
                        },
                        RepositoryFixReport {
                            repository: "classroom/template-repo".into(),
                            outcome: RepositoryFixOutcome::SkippedNoMatch,
                        },
                    ],
                })
            });

        let mut ctx = CommandContextTest::new();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn FixOrganizationCollaboratorsInterface>(Box::new(mock))
            .build();

        let output = test_command(
            ctx,
            &[
                "fix-collaborators",
                "--github-token",
                "abcdef",
                "--github-organization-name",
                "classroom",
                "--github-repository-username-pattern",
                "^hw1-(.+)$",
                "--github-repository-permission",
                "push",
                "--dry-run",
            ],
        )
        .await;

        assert_eq!(
            output,
            "2 repositories: 0 granted, 0 already satisfied, 1 skipped, 1 would be granted\n"
        );
    }

    #[test]
    fn configure_copies_token() {
        let mut config = Config::from_env_no_version();
        let command = FixCollaboratorsCommand {
            github_token: Some("abcdef".into()),
            ..empty_command()
        };

        command.configure(&mut config);

        assert_eq!(config.api.github.token, "abcdef");
    }

    #[test]
    fn missing_settings() {
        let command = FixCollaboratorsCommand {
            github_organization_name: Some("classroom".into()),
            ..empty_command()
        };

        let err = command.into_options().unwrap_err();
        match err.downcast_ref::<ValidationError>() {
            Some(ValidationError::MissingSettings { command, errors }) => {
                assert_eq!(command, "fix-collaborators");
                assert!(errors.contains("--github-token (env. var.: GITHUB_TOKEN)"));
                assert!(errors.contains("GITHUB_REPOSITORY_USERNAME_PATTERN"));
                assert!(errors.contains("GITHUB_REPOSITORY_PERMISSION"));
                assert!(!errors.contains("GITHUB_ORGANIZATION_NAME"));
            }
            None => panic!("Unexpected error: {err}"),
        }
    }

    #[test]
    fn invalid_pattern() {
        let command = FixCollaboratorsCommand {
            github_token: Some("abcdef".into()),
            github_organization_name: Some("classroom".into()),
            github_repository_username_pattern: Some("^hw1-(.+$".into()),
            github_repository_permission: Some(GhRepositoryPermission::Push),
            dry_run: false,
        };

        let err = command.into_options().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::RegexError { .. })
        ));
    }

    #[test]
    fn invalid_permission_is_rejected_by_parser() {
        assert!(Args::try_parse_from([
            "classroom",
            "fix-collaborators",
            "--github-repository-permission",
            "write",
        ])
        .is_err());
    }

    #[test]
    fn dry_run_from_environment() {
        for (value, expected) in [
            ("1", true),
            ("yes", true),
            ("true", true),
            ("0", false),
            ("no", false),
            ("off", false),
        ] {
            std::env::set_var("GITHUB_DRY_RUN", value);
            let command = FixCollaboratorsCommand::try_parse_from(["fix-collaborators"]);
            std::env::remove_var("GITHUB_DRY_RUN");

            assert_eq!(command.map(|c| c.dry_run).ok(), Some(expected), "{value}");
        }
    }

    #[test]
    fn dry_run_flag() {
        let command =
            FixCollaboratorsCommand::try_parse_from(["fix-collaborators", "--dry-run"]).unwrap();

        assert!(command.dry_run);
    }
}
