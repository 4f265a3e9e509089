use std::path::PathBuf;

use async_trait::async_trait;
use clap::Parser;
use classroom_config::Config;
use classroom_core::use_cases::roster::{
    CourseUsersQuery, CreateRosterInterface, CreateRosterOptions,
};
use shaku::HasComponent;

use super::{Command, CommandContext};
use crate::{validation::RequiredSettings, Result};

/// Export course users missing from an existing roster as a CSV file
#[derive(Parser)]
pub(crate) struct CreateRosterCommand {
    /// Canvas instance URL (e.g. `https://canvas.example.edu`)
    #[arg(long, env = "CANVAS_URL")]
    canvas_url: Option<String>,

    /// Canvas access token
    #[arg(long, env = "CANVAS_TOKEN", hide_env_values = true)]
    canvas_token: Option<String>,

    /// Course ID
    #[arg(long, env = "CANVAS_COURSE_ID")]
    canvas_course_id: Option<String>,

    /// Enrollment types, comma-separated
    #[arg(
        long,
        env = "CANVAS_ENROLLMENT_TYPES",
        value_delimiter = ',',
        default_value = "student"
    )]
    canvas_enrollment_types: Vec<String>,

    /// Enrollment states, comma-separated
    #[arg(
        long,
        env = "CANVAS_ENROLLMENT_STATES",
        value_delimiter = ',',
        default_value = "active"
    )]
    canvas_enrollment_states: Vec<String>,

    /// Previously exported roster, with a `name` column
    #[arg(long, env = "EXISTING_ROSTER")]
    existing_roster: Option<PathBuf>,

    /// Output file, overwritten
    #[arg(long, env = "OUTPUT_ROSTER", default_value = "roster.csv")]
    output_roster: PathBuf,
}

impl CreateRosterCommand {
    pub fn configure(&self, config: &mut Config) {
        if let Some(url) = &self.canvas_url {
            config.api.canvas.url = url.clone();
        }
        if let Some(token) = &self.canvas_token {
            config.api.canvas.token = token.clone();
        }
    }

    fn into_options(self) -> Result<CreateRosterOptions> {
        match (self.canvas_url, self.canvas_token, self.canvas_course_id) {
            (Some(_), Some(_), Some(course_id)) => Ok(CreateRosterOptions {
                query: CourseUsersQuery {
                    course_id,
                    enrollment_types: self.canvas_enrollment_types,
                    enrollment_states: self.canvas_enrollment_states,
                },
                existing_roster: self.existing_roster,
                output_roster: self.output_roster,
            }),
            (url, token, course_id) => {
                let mut required = RequiredSettings::new("create-roster");
                required
                    .check(&url, "canvas-url", "CANVAS_URL")
                    .check(&token, "canvas-token", "CANVAS_TOKEN")
                    .check(&course_id, "canvas-course-id", "CANVAS_COURSE_ID");

                Err(required.into_error().into())
            }
        }
    }
}

#[async_trait]
impl Command for CreateRosterCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let options = self.into_options()?;

        let create_roster: &dyn CreateRosterInterface = ctx.core_module.resolve_ref();
        let roster = create_roster
            .run(&ctx.as_core_context(), &options)
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Added {} users to {} ({} already in roster)",
            roster.added.len(),
            options.output_roster.display(),
            roster.skipped
        )?;

        Ok(())
    }
}
