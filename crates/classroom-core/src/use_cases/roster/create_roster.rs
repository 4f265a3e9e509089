use std::{collections::HashSet, path::PathBuf};

use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};

use super::{BuildRosterInterface, CourseUsersQuery, Roster};
use crate::{
    roster::{read_existing_names_from_path, write_roster_to_path},
    CoreContext, Result,
};

/// Settings of a roster export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRosterOptions {
    pub query: CourseUsersQuery,
    /// Previously exported roster, with a `name` header.
    pub existing_roster: Option<PathBuf>,
    /// Destination, overwritten.
    pub output_roster: PathBuf,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CreateRosterInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, options: &CreateRosterOptions)
        -> Result<Roster>;
}

#[derive(Component)]
#[shaku(interface = CreateRosterInterface)]
pub(crate) struct CreateRoster;

#[async_trait]
impl CreateRosterInterface for CreateRoster {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        options: &CreateRosterOptions,
    ) -> Result<Roster> {
        let existing_names = match &options.existing_roster {
            Some(path) => {
                let names = read_existing_names_from_path(path)?;
                tracing::info!(
                    "Loaded {} names from existing roster {}",
                    names.len(),
                    path.display()
                );
                names
            }
            None => HashSet::new(),
        };

        let build_roster: &dyn BuildRosterInterface = ctx.core_module.resolve_ref();
        let roster = build_roster
            .run(ctx, &options.query, &existing_names)
            .await?;

        write_roster_to_path(&options.output_roster, &roster.added)?;
        tracing::info!(
            "Wrote {} names to {}",
            roster.added.len(),
            options.output_roster.display()
        );

        Ok(roster)
    }
}
