use async_trait::async_trait;

use crate::{types::CanvasUser, Result};

/// Canvas API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CanvasService: Send + Sync {
    /// List every user of a course matching the enrollment filters.
    ///
    /// Pagination is handled by the implementation.
    async fn course_users_list(
        &self,
        course_id: &str,
        enrollment_types: &[String],
        enrollment_states: &[String],
    ) -> Result<Vec<CanvasUser>>;
}
