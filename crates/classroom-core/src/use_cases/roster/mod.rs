pub(crate) mod build_roster;
pub(crate) mod create_roster;

pub use build_roster::{BuildRosterInterface, CourseUsersQuery, Roster};
pub use create_roster::{CreateRosterInterface, CreateRosterOptions};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    build_roster::MockBuildRosterInterface, create_roster::MockCreateRosterInterface,
};
