use std::collections::HashSet;

use async_trait::async_trait;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

/// Enrolled users selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseUsersQuery {
    pub course_id: String,
    pub enrollment_types: Vec<String>,
    pub enrollment_states: Vec<String>,
}

impl CourseUsersQuery {
    /// Active students of a course.
    pub fn new<T: Into<String>>(course_id: T) -> Self {
        Self {
            course_id: course_id.into(),
            enrollment_types: vec!["student".into()],
            enrollment_states: vec!["active".into()],
        }
    }
}

/// Net-new roster entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Names to write, in enrollment order.
    pub added: Vec<String>,
    /// Users already known under one of their names.
    pub skipped: usize,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait BuildRosterInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        query: &CourseUsersQuery,
        existing_names: &HashSet<String>,
    ) -> Result<Roster>;
}

#[derive(Component)]
#[shaku(interface = BuildRosterInterface)]
pub(crate) struct BuildRoster;

#[async_trait]
impl BuildRosterInterface for BuildRoster {
    #[tracing::instrument(
        skip(self, ctx, existing_names),
        fields(existing = existing_names.len())
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        query: &CourseUsersQuery,
        existing_names: &HashSet<String>,
    ) -> Result<Roster> {
        let users = ctx
            .canvas_service
            .course_users_list(
                &query.course_id,
                &query.enrollment_types,
                &query.enrollment_states,
            )
            .await?;
        tracing::info!("Found {} users in course {}", users.len(), query.course_id);

        let mut roster = Roster::default();
        for user in users {
            if user.names().any(|name| existing_names.contains(name)) {
                tracing::debug!("Skipping user {} (Already in roster)", user.name);
                roster.skipped += 1;
            } else {
                roster.added.push(user.name);
            }
        }

        Ok(roster)
    }
}
